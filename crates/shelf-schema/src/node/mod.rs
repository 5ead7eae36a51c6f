mod choice;
mod field;
mod record;
mod schema;

pub use choice::{ChoiceSet, ChoiceVariant};
pub use field::{Field, FieldList};
pub use record::Record;
pub use schema::Schema;
