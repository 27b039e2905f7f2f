mod caption_brief;
mod static_fragment;

pub use caption_brief::*;
pub use static_fragment::*;
