pub mod aggregate;
pub mod category;
pub mod charset;
pub mod config;
pub mod date;
pub mod entry;
pub mod export;
pub mod fs;
pub mod interval;
pub mod layout;
pub mod qty;
pub mod record;
pub mod recordlist;
pub mod report;
pub mod session;
pub mod stock;
pub mod store;
pub mod summary;
pub mod tree;
pub mod util;
pub mod window;

pub use aggregate::Aggregate;
pub use category::Category;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use entry::InputMode;
pub use entry::Quantity;
pub use entry::RawEntry;
pub use fs::Fs;
pub use interval::Interval;
pub use layout::Layout;
pub use qty::Qty;
pub use record::Record;
pub use recordlist::Recordlist;
pub use report::Report;
pub use session::Session;
pub use stock::LowStock;
pub use stock::StockLevel;
pub use store::CsvStore;
pub use store::Row;
pub use store::Store;
pub use summary::CategorySummary;
pub use summary::Summaries;
pub use tree::Tree;
pub use window::Window;
