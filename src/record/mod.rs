//! Record engine: numbering, lookup, creation and section edits

pub mod factory;
pub mod link;
pub mod locate;
pub mod numbering;
pub mod sanitize;
pub mod scan;
pub mod section;
pub mod template;

pub use factory::RecordFactory;
pub use link::{link, supersede, LinkReport};
pub use locate::find;
pub use numbering::next_number;
pub use sanitize::sanitize;
pub use section::{insert_before_next_section, replace_section, EditOutcome};
