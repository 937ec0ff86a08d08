use crate::quantity::{cpu_quantity, memory_quantity};
use crate::testing::generate_id;
use k8s_openapi::api::core::v1::{Node, NodeStatus};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use rand::Rng;
use std::collections::BTreeMap;

pub const RESOURCE_CPU: &str = "cpu";
pub const RESOURCE_MEMORY: &str = "memory";

/// NodeFixtureConfig: exclusive upper bounds of the values drawn for test nodes.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NodeFixtureConfig {
    /// Number of nodes is drawn in `[0, max_nodes)`.
    pub max_nodes: u64,
    /// Allocatable and capacity cpu are drawn in `[0, max_cpu_millis)` millicores.
    pub max_cpu_millis: u64,
    /// Allocatable and capacity memory are drawn in `[0, max_memory)` G.
    pub max_memory: u64,
}

impl Default for NodeFixtureConfig {
    fn default() -> Self {
        NodeFixtureConfig {
            max_nodes: 10,
            max_cpu_millis: 100,
            max_memory: 5,
        }
    }
}

/// Returns a set of nodes for test purpose. Those nodes have random names and capacities / allocatable.
///
/// The returned set may be empty.
pub fn generate_test_nodes(namespace: &str) -> Vec<Node> {
    generate_test_nodes_with_rng(&mut rand::rng(), namespace)
}

/// Same as [`generate_test_nodes`] but draws from `rng`, pass a seeded rng to get reproducible nodes.
pub fn generate_test_nodes_with_rng<R: Rng>(rng: &mut R, namespace: &str) -> Vec<Node> {
    generate_test_nodes_with_config(rng, namespace, &NodeFixtureConfig::default())
}

pub fn generate_test_nodes_with_config<R: Rng>(rng: &mut R, namespace: &str, config: &NodeFixtureConfig) -> Vec<Node> {
    let number_of_nodes = draw(rng, config.max_nodes);
    debug!(namespace, number_of_nodes, "generating test nodes");

    (0..number_of_nodes)
        .map(|_| {
            let allocatable_cpu = draw(rng, config.max_cpu_millis);
            let allocatable_memory = draw(rng, config.max_memory);
            let capacity_cpu = draw(rng, config.max_cpu_millis);
            let capacity_memory = draw(rng, config.max_memory);

            Node {
                metadata: ObjectMeta {
                    name: Some(format!("rand-{}-node", generate_id(rng))),
                    namespace: Some(namespace.to_string()),
                    ..Default::default()
                },
                status: Some(NodeStatus {
                    allocatable: Some(resource_list(allocatable_cpu, allocatable_memory)),
                    capacity: Some(resource_list(capacity_cpu, capacity_memory)),
                    ..Default::default()
                }),
                ..Default::default()
            }
        })
        .collect()
}

// draws in [0, bound), an empty range always yields 0
fn draw<R: Rng>(rng: &mut R, bound: u64) -> u64 {
    match bound {
        0 => 0,
        _ => rng.random_range(0..bound),
    }
}

fn resource_list(cpu_millis: u64, memory: u64) -> BTreeMap<String, Quantity> {
    BTreeMap::from([
        (RESOURCE_CPU.to_string(), cpu_quantity(cpu_millis)),
        (RESOURCE_MEMORY.to_string(), memory_quantity(memory)),
    ])
}
