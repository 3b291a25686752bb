pub mod list_adapter;

pub use list_adapter::VecDnsListAdapter;
