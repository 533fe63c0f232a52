use m2m_object::{ObjectInstance, ResourceEntity};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    AddDynamic(&'static str),
    AddStatic(&'static str, Vec<u8>),
    Remove(&'static str, u16),
}

const NAMES: [&str; 3] = ["5700", "5701", "5750"];

fn op_strategy() -> impl Strategy<Value = Op> {
    let name = prop::sample::select(NAMES.to_vec());
    prop_oneof![
        name.clone().prop_map(Op::AddDynamic),
        (name.clone(), prop::collection::vec(any::<u8>(), 0..4))
            .prop_map(|(n, v)| Op::AddStatic(n, v)),
        (name, 0u16..4).prop_map(|(n, id)| Op::Remove(n, id)),
    ]
}

fn expected_id(instance: &ObjectInstance, name: &str) -> u16 {
    instance
        .resources()
        .iter()
        .find(|r| r.name() == name)
        .map_or(0, |r| r.instance_id().wrapping_add(1))
}

fn matching(instance: &ObjectInstance, name: &str, id: u16) -> usize {
    instance
        .resources()
        .iter()
        .filter(|r| r.name() == name && r.instance_id() == id)
        .count()
}

proptest! {
    #[test]
    fn added_id_follows_first_same_named_resource(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut instance: ObjectInstance = ObjectInstance::new("3303");

        for op in ops {
            match op {
                Op::AddDynamic(name) => {
                    let expected = expected_id(&instance, name);
                    let added = instance.create_dynamic_resource(name, "", false, true);
                    prop_assert_eq!(added.instance_id(), expected);
                }
                Op::AddStatic(name, value) => {
                    let expected = expected_id(&instance, name);
                    if let Some(added) = instance.create_static_resource(name, "", &value, true) {
                        prop_assert_eq!(added.instance_id(), expected);
                    }
                }
                Op::Remove(name, id) => {
                    instance.remove_resource(name, id);
                }
            }
        }
    }

    #[test]
    fn count_tracks_successful_adds_and_removes(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut instance: ObjectInstance = ObjectInstance::new("3303");
        let mut expected: usize = 0;

        for op in ops {
            match op {
                Op::AddDynamic(name) => {
                    instance.create_dynamic_resource(name, "", false, true);
                    expected += 1;
                }
                Op::AddStatic(name, value) => {
                    if instance.create_static_resource(name, "", &value, true).is_some() {
                        expected += 1;
                    }
                }
                Op::Remove(name, id) => {
                    let same_name = instance.resource_count_by_name(name);
                    let same_identity = matching(&instance, name, id);

                    let removed = instance.remove_resource(name, id);
                    prop_assert_eq!(removed, same_identity > 0);
                    if removed {
                        expected -= 1;
                        prop_assert_eq!(instance.resource_count_by_name(name), same_name - 1);
                        // A duplicate identity stays addressable after the first match goes.
                        prop_assert_eq!(instance.resource(name, id).is_some(), same_identity > 1);
                    }
                }
            }
            prop_assert_eq!(instance.resource_count(), expected);
        }

        let by_name: usize = NAMES.iter().map(|n| instance.resource_count_by_name(n)).sum();
        prop_assert_eq!(by_name, instance.resource_count());
        prop_assert_eq!(instance.resource_count_by_name("never-added"), 0);
    }

    #[test]
    fn clone_is_unaffected_by_later_mutation(ops in prop::collection::vec(op_strategy(), 0..20)) {
        let mut original: ObjectInstance = ObjectInstance::new("3303");
        original.create_dynamic_resource("5700", "", false, true);
        original.create_dynamic_resource("5701", "", false, false);

        let mut copy = original.clone();
        for op in ops {
            match op {
                Op::AddDynamic(name) => {
                    copy.create_dynamic_resource(name, "", false, true);
                }
                Op::AddStatic(name, value) => {
                    copy.create_static_resource(name, "", &value, true);
                }
                Op::Remove(name, id) => {
                    copy.remove_resource(name, id);
                }
            }
        }

        prop_assert_eq!(original.resource_count(), 2);
        prop_assert!(original.resource("5700", 0).is_some());
        prop_assert!(original.resource("5701", 0).is_some());
    }
}
