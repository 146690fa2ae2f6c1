mod work_recommendation;

pub use work_recommendation::*;
