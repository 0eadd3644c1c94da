mod blacklist_loader;

pub use blacklist_loader::BlacklistLoader;
