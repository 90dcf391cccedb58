pub use connectivity::*;
pub use snapshot::*;

mod connectivity;
mod snapshot;
