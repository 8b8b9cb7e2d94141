//! Stress tests that push the collections through large operation counts
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use backport_collections::{OrderedDictionary, PriorityQueue};

/// Simple LCG so the sequences are reproducible without extra dependencies
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

#[test]
fn test_massive_enqueue_dequeue() {
    let mut queue = PriorityQueue::new();

    for i in 0..10_000 {
        queue.enqueue(i, i);
    }
    assert_eq!(queue.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(queue.dequeue(), Ok((i, i)));
    }
    assert!(queue.is_empty());
}

#[test]
fn test_alternating_ops() {
    let mut queue = PriorityQueue::new();

    // Enqueue-enqueue-dequeue pattern
    for i in 0..2_000 {
        queue.enqueue(i, i * 2);
        queue.enqueue(i + 10_000, i * 2 + 1);
        assert!(queue.try_dequeue().is_some());
    }
    assert_eq!(queue.len(), 2_000);
    assert!(queue.check_invariants().is_ok());

    let mut last = i32::MIN;
    while let Some((_, priority)) = queue.try_dequeue() {
        assert!(priority >= last);
        last = priority;
    }
}

#[test]
fn test_random_priorities_drain_sorted() {
    let mut rng = Lcg::new(0x5eed);
    let mut expected = Vec::new();
    let mut queue = PriorityQueue::new();

    for i in 0..5_000u64 {
        let priority = rng.below(1_000);
        queue.enqueue(i, priority);
        expected.push(priority);
    }

    expected.sort_unstable();
    let drained: Vec<u64> = queue
        .into_sorted_vec()
        .into_iter()
        .map(|(_, p)| p)
        .collect();
    assert_eq!(drained, expected);
}

#[test]
fn test_enqueue_dequeue_sliding_window() {
    // Keeps the k largest values seen, a typical use of enqueue_dequeue.
    let mut rng = Lcg::new(42);
    let values: Vec<u64> = (0..5_000).map(|_| rng.below(100_000)).collect();

    let mut queue = PriorityQueue::from_items(values[..100].iter().map(|&v| (v, v)));
    for &v in &values[100..] {
        queue.enqueue_dequeue(v, v);
    }
    assert_eq!(queue.len(), 100);

    let mut top: Vec<u64> = queue
        .into_sorted_vec()
        .into_iter()
        .map(|(_, p)| p)
        .collect();
    let mut sorted = values.clone();
    sorted.sort_unstable();
    let mut expected = sorted[sorted.len() - 100..].to_vec();
    top.sort_unstable();
    expected.sort_unstable();
    assert_eq!(top, expected);
}

#[test]
fn test_dictionary_many_adds_and_removes() {
    let mut dict = OrderedDictionary::new();
    for i in 0..5_000u32 {
        dict.add(i, i * 2).unwrap();
    }

    // Remove every third key; the survivors keep their relative order.
    for i in (0..5_000u32).step_by(3) {
        assert_eq!(dict.remove(&i), Some(i * 2));
    }
    let expected: Vec<u32> = (0..5_000u32).filter(|i| i % 3 != 0).collect();
    assert_eq!(dict.keys().copied().collect::<Vec<_>>(), expected);
    assert!(dict.check_invariants().is_ok());
}

#[test]
fn test_dictionary_random_positional_ops() {
    let mut rng = Lcg::new(7);
    let mut dict = OrderedDictionary::new();
    let mut model: Vec<u64> = Vec::new();

    for step in 0..3_000u64 {
        match rng.below(3) {
            0 | 1 => {
                let index = rng.below(model.len() as u64 + 1) as usize;
                dict.insert(index, step, step).unwrap();
                model.insert(index, step);
            }
            _ if !model.is_empty() => {
                let index = rng.below(model.len() as u64) as usize;
                assert_eq!(
                    dict.remove_at(index).map(|(k, _)| k),
                    Ok(model.remove(index))
                );
            }
            _ => {}
        }
    }

    assert_eq!(dict.keys().copied().collect::<Vec<_>>(), model);
    assert!(dict.check_invariants().is_ok());
    for (i, key) in model.iter().enumerate() {
        assert_eq!(dict.index_of(key), Some(i));
    }
}

#[test]
fn test_dictionary_clear_and_reuse() {
    let mut dict = OrderedDictionary::new();
    for round in 0..10u32 {
        for i in 0..500u32 {
            dict.add(i, round).unwrap();
        }
        assert_eq!(dict.len(), 500);
        assert_eq!(dict.get(&499), Some(&round));
        dict.clear();
        assert!(dict.is_empty());
    }
}
