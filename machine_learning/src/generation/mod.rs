mod marks;
mod sample_gen;

pub use marks::{MARKS_HIGH, MARKS_LOW, MARKS_PER_SAMPLE, MarksGen, NOISE_STD_DEV};
pub use sample_gen::SampleGen;
