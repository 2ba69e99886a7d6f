//! Integration tests for CircularQueue

mod common;
use common::*;

use keypad_queue::{CircularQueue, QueueError};

#[test]
fn new_queue_is_empty() {
    let mut storage = [0u32; 4];
    let queue = CircularQueue::new(&mut storage);

    assert!(queue.is_empty());
    assert!(!queue.is_full());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.capacity(), 4);
    assert_eq!(queue.peek(), None);
}

#[test]
fn four_writes_fill_queue_and_reads_return_fifo_order() {
    let mut storage = [0u32; 4];
    let mut queue = CircularQueue::new(&mut storage);

    for value in 1..=4 {
        assert_eq!(queue.write(value), Ok(()));
    }
    assert!(queue.is_full());
    assert_eq!(queue.write(5), Err(QueueError::Full));

    for expected in 1..=4 {
        assert_eq!(queue.read(), Ok(expected));
    }
    assert!(queue.is_empty());
    assert_eq!(queue.read(), Err(QueueError::Empty));
}

#[test]
fn rejected_write_leaves_contents_unchanged() {
    let mut storage = [0u8; 2];
    let mut queue = CircularQueue::new(&mut storage);
    queue.write(10).unwrap();
    queue.write(20).unwrap();

    assert_eq!(queue.write(30), Err(QueueError::Full));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.peek(), Some(&10));

    let storage = queue.release();
    assert_eq!(storage, &[10, 20]);
}

#[test]
fn read_from_empty_queue_fails() {
    let mut storage = [0i16; 3];
    let mut queue = CircularQueue::new(&mut storage);

    assert_eq!(queue.read(), Err(QueueError::Empty));
    assert!(queue.is_empty());
}

#[test]
fn is_empty_after_reads_catch_up_with_writes() {
    let mut storage = [0u8; 4];
    let mut queue = CircularQueue::new(&mut storage);

    queue.write(1).unwrap();
    queue.write(2).unwrap();
    assert!(!queue.is_empty());

    queue.read().unwrap();
    assert!(!queue.is_empty());
    queue.read().unwrap();
    assert!(queue.is_empty());

    queue.write(3).unwrap();
    assert!(!queue.is_empty());
}

#[test]
fn writes_and_reads_wrap_around_storage() {
    let mut storage = [0u16; 3];
    let mut queue = CircularQueue::new(&mut storage);

    let mut next_write = 0u16;
    let mut next_read = 0u16;
    for _ in 0..10 {
        while queue.write(next_write).is_ok() {
            next_write += 1;
        }
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.read(), Ok(next_read));
        assert_eq!(queue.read(), Ok(next_read + 1));
        next_read += 2;
        assert_eq!(queue.len(), 1);
    }
}

#[test]
fn records_come_out_as_exact_copies() {
    let mut storage = [Record::default(); 8];
    let mut queue = CircularQueue::new(&mut storage);

    for id in 0..5 {
        queue.write(Record::new(id)).unwrap();
    }
    for id in 0..5 {
        assert_eq!(queue.read(), Ok(Record::new(id)));
    }
}

#[test]
fn flush_resets_state_but_keeps_storage() {
    let mut storage = [0u32; 4];
    let mut queue = CircularQueue::new(&mut storage);
    queue.write(11).unwrap();
    queue.write(22).unwrap();
    queue.write(33).unwrap();
    queue.read().unwrap();

    queue.flush();
    assert!(queue.is_empty());
    assert!(!queue.is_full());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.read(), Err(QueueError::Empty));

    // Stale elements are overwritten only by new writes
    queue.write(44).unwrap();
    let storage = queue.release();
    assert_eq!(storage, &[44, 22, 33, 0]);
}

#[test]
fn flush_of_full_queue_allows_writes_again() {
    let mut storage = [0u8; 2];
    let mut queue = CircularQueue::new(&mut storage);
    queue.write(1).unwrap();
    queue.write(2).unwrap();
    assert!(queue.is_full());

    queue.flush();
    assert_eq!(queue.write(3), Ok(()));
    assert_eq!(queue.read(), Ok(3));
}

#[test]
fn storage_contents_before_new_are_not_readable() {
    let mut storage = [9u8; 3];
    let mut queue = CircularQueue::new(&mut storage);

    assert_eq!(queue.read(), Err(QueueError::Empty));
    queue.write(1).unwrap();
    assert_eq!(queue.read(), Ok(1));
}

#[test]
fn single_slot_queue_alternates_full_and_empty() {
    let mut storage = [0u64; 1];
    let mut queue = CircularQueue::new(&mut storage);

    for value in 0..4u64 {
        queue.write(value).unwrap();
        assert!(queue.is_full());
        assert!(!queue.is_empty());
        assert_eq!(queue.write(value), Err(QueueError::Full));

        assert_eq!(queue.read(), Ok(value));
        assert!(queue.is_empty());
        assert!(!queue.is_full());
    }
}

#[test]
fn errors_display_reason() {
    assert_eq!(format!("{}", QueueError::Full), "queue is full");
    assert_eq!(format!("{}", QueueError::Empty), "queue is empty");
}
