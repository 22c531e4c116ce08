mod counts;
mod entry;

pub use counts::AggregateCounts;
pub use entry::ListingEntry;
