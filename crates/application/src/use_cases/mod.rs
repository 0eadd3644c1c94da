pub mod load_blacklist;
pub mod lookup_host;

pub use load_blacklist::LoadBlacklistUseCase;
pub use lookup_host::LookupHostUseCase;
