//! Property tests for FIFO order, peek purity and overflow accounting

use proptest::prelude::*;
use ring_buffer::RingBuffer;
use std::collections::VecDeque;

const CAP: usize = 16;

#[derive(Debug, Clone)]
enum Op {
    Write(u8),
    Read,
    Peek,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u8>().prop_map(Op::Write),
        2 => Just(Op::Read),
        1 => Just(Op::Peek),
    ]
}

proptest! {
    #[test]
    fn fifo_order_within_capacity(values in prop::collection::vec(any::<u8>(), 0..=CAP)) {
        let mut buffer: RingBuffer<u8, CAP> = RingBuffer::new();
        for &v in &values {
            buffer.write_back(v);
        }
        prop_assert_eq!(buffer.len(), values.len());
        prop_assert_eq!(buffer.overflow(), 0);

        for &v in &values {
            prop_assert_eq!(buffer.read_front(), v);
        }
        prop_assert!(buffer.is_empty());
    }

    #[test]
    fn overflow_counts_each_write_past_capacity(extra in 0usize..64) {
        let mut buffer: RingBuffer<u8, CAP> = RingBuffer::new();
        for i in 0..CAP + extra {
            buffer.write_back(i as u8);
        }
        prop_assert_eq!(buffer.len(), CAP);
        prop_assert_eq!(buffer.overflow() as usize, extra);
        // Oldest retained value is the first one not evicted
        prop_assert_eq!(buffer.peek(), extra as u8);
    }

    #[test]
    fn peek_is_idempotent(values in prop::collection::vec(any::<u8>(), 0..40), peeks in 1usize..5) {
        let mut buffer: RingBuffer<u8, CAP> = RingBuffer::new();
        for &v in &values {
            buffer.write_back(v);
        }
        let before = buffer.stats();
        let first = buffer.peek();
        for _ in 0..peeks {
            prop_assert_eq!(buffer.peek(), first);
        }
        prop_assert_eq!(buffer.stats(), before);
    }

    #[test]
    fn matches_bounded_deque_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut buffer: RingBuffer<u8, CAP> = RingBuffer::new();
        let mut model: VecDeque<u8> = VecDeque::new();
        let mut overflow = 0u32;

        for op in ops {
            match op {
                Op::Write(v) => {
                    if model.len() == CAP {
                        model.pop_front();
                        overflow += 1;
                    }
                    model.push_back(v);
                    buffer.write_back(v);
                }
                Op::Read => {
                    let expected = model.pop_front().unwrap_or(0);
                    prop_assert_eq!(buffer.read_front(), expected);
                }
                Op::Peek => {
                    let expected = model.front().copied().unwrap_or(0);
                    prop_assert_eq!(buffer.peek(), expected);
                }
            }
            prop_assert_eq!(buffer.len(), model.len());
            prop_assert_eq!(buffer.overflow(), overflow);
            prop_assert!(buffer.read_head() < CAP);
        }
    }
}
