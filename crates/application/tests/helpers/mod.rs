mod mock_loader;

pub use mock_loader::MockBlacklistLoader;
