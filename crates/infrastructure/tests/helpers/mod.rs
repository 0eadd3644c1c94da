mod etcd_server_mock;

pub use etcd_server_mock::{closed_endpoint, MockEtcdServer, MockReply};
