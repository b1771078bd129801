mod record_type;
mod resource;

pub use record_type::RecordType;
pub use resource::ResourceRecord;
