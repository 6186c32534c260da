//! Form components and their shared appearance defaults.

pub mod defaults;
pub mod text_field;
