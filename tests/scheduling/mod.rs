use crate::helpers::{MostAllocatableCpu, allocatable_cpu_millis, pod};
use kube_fixtures::nodes::{NodeFixtureConfig, generate_test_nodes_with_config, generate_test_nodes_with_rng};
use kube_fixtures::{EventType, event_string, logger, new_recorder, test_case_msg};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_schedule_on_generated_nodes() {
    logger::init();

    for seed in 0..50 {
        // setup:
        let recorder = new_recorder(10);
        let scheduler = MostAllocatableCpu { recorder: &recorder };
        let nodes = generate_test_nodes_with_rng(&mut StdRng::seed_from_u64(seed), "scheduling");
        let pod = pod("pod-1");

        // execute:
        let selected = scheduler.schedule(&pod, &nodes);

        // validate:
        let expected_event = match &selected {
            Some(node_name) => {
                let best = nodes.iter().filter_map(allocatable_cpu_millis).max();
                let selected_node = nodes
                    .iter()
                    .find(|node| node.metadata.name.as_ref() == Some(node_name))
                    .expect("selected node is not part of the fixtures");
                assert_eq!(allocatable_cpu_millis(selected_node), best, "{}", test_case_msg(&seed.to_string()));

                event_string!(&pod, EventType::Normal, "Scheduled", "assigned pod {} to {}", "pod-1", node_name)
            }
            None => {
                assert!(nodes.is_empty(), "{}", test_case_msg(&seed.to_string()));
                event_string!(&pod, EventType::Warning, "FailedScheduling", "0/{} nodes are available", 0)
            }
        };
        assert_eq!(recorder.events(), vec![expected_event], "{}", test_case_msg(&seed.to_string()));
    }
}

#[test]
fn test_logger_init_twice() {
    logger::init();
    logger::init();

    tracing::info!("logger initialized twice");
}

#[test]
fn test_schedule_without_nodes() {
    // setup:
    let recorder = new_recorder(1);
    let scheduler = MostAllocatableCpu { recorder: &recorder };
    let config = NodeFixtureConfig {
        max_nodes: 0,
        ..Default::default()
    };
    let nodes = generate_test_nodes_with_config(&mut StdRng::seed_from_u64(0), "scheduling", &config);

    // execute:
    let selected = scheduler.schedule(&pod("pod-2"), &nodes);

    // validate:
    assert_eq!(selected, None);
    assert_eq!(
        recorder.try_next_event().as_deref(),
        Some("Warning FailedScheduling 0/0 nodes are available involvedObject{kind=Pod,apiVersion=v1}")
    );
}

#[test]
fn test_annotated_scheduling_event() {
    // setup:
    let recorder = new_recorder(1);
    let annotations = btreemap! {
        "scheduler".to_string() => "most-allocatable-cpu".to_string(),
    };

    // execute:
    recorder.annotated_eventf(
        &pod("pod-3"),
        &annotations,
        EventType::Normal,
        "Scheduled",
        format_args!("assigned pod {}", "pod-3"),
    );

    // validate:
    assert_eq!(
        recorder.events(),
        vec![format!(
            "{} map[scheduler:most-allocatable-cpu]",
            event_string!(&pod("pod-3"), EventType::Normal, "Scheduled", "assigned pod {}", "pod-3")
        )]
    );
}
