use kube::Resource;
use std::collections::BTreeMap;
use std::fmt::Arguments;
use strum_macros::{AsRefStr, Display, EnumString};

/// EventType: type of a Kubernetes event, as carried by `Event.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
pub enum EventType {
    Normal,
    Warning,
}

/// Returns the exact string a [`FakeRecorder`](crate::recorder::FakeRecorder) created by
/// [`new_recorder`](crate::recorder::new_recorder) records for the given event.
///
/// Arguments
///
/// * `object`: the involved object, only its kind and apiVersion are rendered.
/// * `event_type`: `Normal`, `Warning` or any raw event type.
/// * `reason`: short machine readable reason, e.g. `Scheduled`.
/// * `message`: formatted message, usually built with `format_args!`.
///
/// ```
/// use k8s_openapi::api::core::v1::Node;
/// use kube_fixtures::events::{event_string, EventType};
///
/// let node = Node::default();
/// assert_eq!(
///     event_string(&node, EventType::Normal, "Scheduled", format_args!("assigned pod {}", "pod-1")),
///     "Normal Scheduled assigned pod pod-1 involvedObject{kind=Node,apiVersion=v1}"
/// );
/// ```
pub fn event_string<K>(object: &K, event_type: impl AsRef<str>, reason: &str, message: Arguments<'_>) -> String
where
    K: Resource<DynamicType = ()>,
{
    format!(
        "{}{}",
        event_line(event_type.as_ref(), reason, message),
        involved_object_suffix(object)
    )
}

/// Same as [`event_string`] but takes the message format and its arguments directly.
///
/// ```
/// use k8s_openapi::api::core::v1::Pod;
/// use kube_fixtures::event_string;
///
/// let pod = Pod::default();
/// assert_eq!(
///     event_string!(&pod, "Warning", "FailedScheduling", "{} nodes available", 0),
///     "Warning FailedScheduling 0 nodes available involvedObject{kind=Pod,apiVersion=v1}"
/// );
/// ```
#[macro_export]
macro_rules! event_string {
    ($object:expr, $event_type:expr, $reason:expr, $($arg:tt)+) => {
        $crate::events::event_string($object, $event_type, $reason, format_args!($($arg)+))
    };
}

pub(crate) fn event_line(event_type: &str, reason: &str, message: Arguments<'_>) -> String {
    format!("{event_type} {reason} {message}")
}

pub(crate) fn involved_object_suffix<K>(_object: &K) -> String
where
    K: Resource<DynamicType = ()>,
{
    format!(
        " involvedObject{{kind={},apiVersion={}}}",
        K::kind(&()),
        K::api_version(&())
    )
}

// renders annotations the way Go prints a map: `map[k1:v1 k2:v2]`, keys sorted
pub(crate) fn annotations_suffix(annotations: &BTreeMap<String, String>) -> String {
    if annotations.is_empty() {
        return String::new();
    }

    let entries = annotations
        .iter()
        .map(|(key, value)| format!("{key}:{value}"))
        .collect::<Vec<String>>()
        .join(" ");

    format!(" map[{entries}]")
}
