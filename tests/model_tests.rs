//! Model-based property tests
//!
//! These tests generate random sequences of operations and apply them both to
//! the real collection and to a deliberately naive reference model (a plain
//! `Vec`). After every operation the two must agree on every observable
//! result, which catches bookkeeping bugs that single-property tests miss.
//!
//! ## Testing Strategy
//!
//! 1. **Generate random inputs**: sequences of opcode/argument tuples
//! 2. **Apply to both**: run each operation on the collection and the model
//! 3. **Compare intermediate results**: return values, `len()`, and peeked or
//!    positional state after each operation
//! 4. **Compare final results**: drain or iterate both and compare

use backport_collections::{CollectionError, OrderedDictionary, PriorityQueue};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

/// Minimum priority in the model, if any
fn model_min(model: &[i32]) -> Option<i32> {
    model.iter().min().copied()
}

/// Removes one occurrence of `priority` from the model
fn model_take(model: &mut Vec<i32>, priority: i32) {
    let pos = model
        .iter()
        .position(|&p| p == priority)
        .expect("queue returned a priority the model does not hold");
    model.swap_remove(pos);
}

/// Runs a random operation sequence against PriorityQueue and a Vec model
///
/// Elements equal their priorities, so results can be compared exactly
/// without depending on tie order.
fn test_queue_matches_model(initial: Vec<i32>, ops: Vec<(u8, i32)>) -> Result<(), TestCaseError> {
    let mut queue = PriorityQueue::from_items(initial.iter().map(|&p| (p, p)));
    let mut model = initial;

    for (op, value) in ops {
        match op % 6 {
            0 | 1 => {
                queue.enqueue(value, value);
                model.push(value);
            }
            2 => match model_min(&model) {
                Some(min) => {
                    prop_assert_eq!(queue.dequeue(), Ok((min, min)));
                    model_take(&mut model, min);
                }
                None => prop_assert_eq!(queue.dequeue(), Err(CollectionError::EmptyCollection)),
            },
            3 => {
                let (_, priority) = queue.enqueue_dequeue(value, value);
                model.push(value);
                let min = model_min(&model).unwrap();
                prop_assert_eq!(priority, min);
                model_take(&mut model, min);
            }
            4 => match model_min(&model) {
                Some(min) => {
                    prop_assert_eq!(queue.dequeue_enqueue(value, value), Ok((min, min)));
                    model_take(&mut model, min);
                    model.push(value);
                }
                None => {
                    prop_assert_eq!(
                        queue.dequeue_enqueue(value, value),
                        Err(CollectionError::EmptyCollection)
                    );
                }
            },
            _ => {
                let batch = [value, value.wrapping_add(7), value.wrapping_sub(3)];
                queue.enqueue_range(batch.iter().map(|&p| (p, p)));
                model.extend(batch);
            }
        }

        prop_assert_eq!(queue.len(), model.len());
        prop_assert_eq!(queue.try_peek().map(|(_, p)| *p), model_min(&model));
    }

    let drained: Vec<i32> = queue
        .into_sorted_vec()
        .into_iter()
        .map(|(_, p)| p)
        .collect();
    model.sort_unstable();
    prop_assert_eq!(drained, model);

    Ok(())
}

/// Runs a random operation sequence against OrderedDictionary and a Vec model
fn test_dictionary_matches_model(ops: Vec<(u8, u8, i32, u8)>) -> Result<(), TestCaseError> {
    let mut dict: OrderedDictionary<u8, i32> = OrderedDictionary::new();
    let mut model: Vec<(u8, i32)> = Vec::new();

    for (op, key, value, position) in ops {
        let model_pos = model.iter().position(|&(k, _)| k == key);
        match op % 8 {
            0 => {
                let result = dict.add(key, value);
                if model_pos.is_some() {
                    prop_assert_eq!(result, Err(CollectionError::DuplicateKey));
                } else {
                    prop_assert_eq!(result, Ok(()));
                    model.push((key, value));
                }
            }
            1 => {
                let index = position as usize % (model.len() + 2);
                let result = dict.insert(index, key, value);
                if index > model.len() {
                    prop_assert_eq!(
                        result,
                        Err(CollectionError::IndexOutOfRange {
                            index,
                            len: model.len(),
                        })
                    );
                } else if model_pos.is_some() {
                    prop_assert_eq!(result, Err(CollectionError::DuplicateKey));
                } else {
                    prop_assert_eq!(result, Ok(()));
                    model.insert(index, (key, value));
                }
            }
            2 => {
                let removed = dict.remove(&key);
                match model_pos {
                    Some(pos) => prop_assert_eq!(removed, Some(model.remove(pos).1)),
                    None => prop_assert_eq!(removed, None),
                }
            }
            3 => {
                let index = position as usize % (model.len() + 1);
                let result = dict.remove_at(index);
                if index < model.len() {
                    prop_assert_eq!(result, Ok(model.remove(index)));
                } else {
                    prop_assert_eq!(
                        result,
                        Err(CollectionError::IndexOutOfRange {
                            index,
                            len: model.len(),
                        })
                    );
                }
            }
            4 => {
                let previous = dict.set(key, value);
                match model_pos {
                    Some(pos) => {
                        prop_assert_eq!(previous, Some(model[pos].1));
                        model[pos].1 = value;
                    }
                    None => {
                        prop_assert_eq!(previous, None);
                        model.push((key, value));
                    }
                }
            }
            5 => {
                let index = position as usize % (model.len() + 1);
                let result = dict.set_at(index, value);
                if index < model.len() {
                    prop_assert_eq!(result, Ok(model[index].1));
                    model[index].1 = value;
                } else {
                    prop_assert!(result.is_err());
                }
            }
            6 => {
                let index = position as usize % (model.len() + 1);
                let result = dict.set_at_entry(index, key, value);
                if index >= model.len() {
                    prop_assert!(result.is_err());
                } else if matches!(model_pos, Some(pos) if pos != index) {
                    prop_assert_eq!(result, Err(CollectionError::DuplicateKey));
                } else {
                    prop_assert_eq!(result, Ok(model[index]));
                    model[index] = (key, value);
                }
            }
            _ => {
                prop_assert_eq!(dict.index_of(&key), model_pos);
                prop_assert_eq!(dict.get(&key).copied(), model_pos.map(|pos| model[pos].1));
            }
        }

        prop_assert_eq!(dict.len(), model.len());
        prop_assert!(dict.check_invariants().is_ok());
    }

    let entries: Vec<(u8, i32)> = dict.iter().map(|(k, v)| (*k, *v)).collect();
    prop_assert_eq!(&entries, &model);
    let owned: Vec<(u8, i32)> = dict.into_iter().collect();
    prop_assert_eq!(owned, model);

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    #[test]
    fn test_priority_queue_model(
        initial in prop::collection::vec(-100i32..100, 0..50),
        ops in prop::collection::vec((any::<u8>(), -100i32..100), 0..100)
    ) {
        test_queue_matches_model(initial, ops)?;
    }

    #[test]
    fn test_ordered_dictionary_model(
        ops in prop::collection::vec((any::<u8>(), 0u8..24, -1000i32..1000, any::<u8>()), 0..150)
    ) {
        test_dictionary_matches_model(ops)?;
    }
}
