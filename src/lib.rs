#[macro_use]
extern crate tracing;
#[macro_use]
extern crate serde_derive;

pub mod events;
pub mod logger;
pub mod nodes;
pub mod quantity;
pub mod recorder;
pub mod testing;

pub use events::{EventType, event_string};
pub use nodes::{NodeFixtureConfig, generate_test_nodes, generate_test_nodes_with_rng};
pub use recorder::{FakeRecorder, new_recorder};
pub use testing::test_case_msg;
