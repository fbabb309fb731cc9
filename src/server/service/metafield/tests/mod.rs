
use crate::server::util::test::{record, test_config, MemoryStore};
