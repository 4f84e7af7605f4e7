// Integration tests for GrowableBuffer
// Tests cover: allocation, growth policy, append/copy, front draining, equality, text

use growbuf::{
    BufferError, ByteBuffer, CharBuffer, GrowableBuffer, GrowthPolicy, TCharBuffer, WideBuffer,
    fmt_buffer,
};

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_release_resets_everything() {
    let mut buffers = vec![
        ByteBuffer::new(),
        ByteBuffer::with_size(3, false).unwrap(),
        ByteBuffer::from_slice(b"some bytes").unwrap(),
    ];

    for buf in &mut buffers {
        buf.release();
        assert_eq!(buf.size(), 0, "size must be 0 after release");
        assert_eq!(buf.capacity(), 0, "capacity must be 0 after release");
        assert!(!buf.is_valid(), "released buffer must be invalid");
    }
}

#[test]
fn test_zero_filled_allocation_scenario() {
    let mut buf = ByteBuffer::new();
    buf.allocate(10, true).unwrap();
    assert_eq!(buf.size(), 10);
    assert!(buf.as_slice().iter().all(|&b| b == 0), "all elements zero");

    buf.append_slice(&[1, 2, 3, 4, 5]).unwrap();
    assert_eq!(buf.size(), 15);
    assert_eq!(&buf.as_slice()[..10], &[0; 10]);
    assert_eq!(&buf.as_slice()[10..], &[1, 2, 3, 4, 5]);

    let old_third = buf[3];
    buf.drain_front(3);
    assert_eq!(buf.size(), 12);
    assert_eq!(buf[0], old_third);
    assert_eq!(&buf.as_slice()[7..], &[1, 2, 3, 4, 5]);
}

#[test]
fn test_copy_construction_is_independent() {
    let original = ByteBuffer::from_slice(&[9, 8, 7, 6, 5, 4, 3]).unwrap();
    let mut copy = ByteBuffer::from_buffer(&original).unwrap();

    assert!(copy.equals(&original));
    assert!(original.equals(&copy));

    copy[0] = 0;
    copy.append_slice(&[1]).unwrap();
    assert_eq!(original.as_slice(), &[9, 8, 7, 6, 5, 4, 3]);
    assert!(!copy.equals(&original));
}

#[test]
fn test_copy_across_growth_bounds() {
    let small = GrowableBuffer::<u16, 0>::from_slice(&[1, 2, 3]).unwrap();
    let big = GrowableBuffer::<u16, 1024>::from_buffer(&small).unwrap();
    assert_eq!(big, small);
    assert!(big.capacity() >= big.size());

    let mut back = GrowableBuffer::<u16, 0>::new();
    back.copy_from(&big).unwrap();
    assert_eq!(back.as_slice(), &[1, 2, 3]);
}

// ============================================================================
// Copy and Append
// ============================================================================

#[test]
fn test_copy_from_slice_then_compare() {
    let data: Vec<u32> = (0..100).collect();
    let mut buf = GrowableBuffer::<u32>::new();
    buf.copy_from_slice(&data).unwrap();

    assert_eq!(buf.size(), data.len());
    assert!(buf.equals_slice(&data));
}

#[test]
fn test_append_matches_copy_of_concatenation() {
    let x: Vec<u8> = (0..37).collect();
    let y: Vec<u8> = (100..164).collect();

    let mut appended = GrowableBuffer::<u8, 32>::new();
    appended.append_slice(&x).unwrap();
    appended.append_slice(&y).unwrap();

    let concat: Vec<u8> = x.iter().chain(y.iter()).copied().collect();
    let copied = ByteBuffer::from_slice(&concat).unwrap();

    assert_eq!(appended, copied);
}

#[test]
fn test_append_buffer() {
    let mut head = ByteBuffer::from_slice(b"key=").unwrap();
    let value = GrowableBuffer::<u8, 8>::from_slice(b"value").unwrap();
    head.append(&value).unwrap().push(b';').unwrap();
    assert_eq!(head.as_slice(), b"key=value;");
}

#[test]
fn test_copy_of_own_content_leaves_buffer_unchanged() {
    // copy_from/append cannot alias the receiver; copying a snapshot of the
    // same content is the closest legal equivalent
    let mut buf = ByteBuffer::from_slice(b"stable").unwrap();
    let snapshot = buf.clone();
    buf.copy_from(&snapshot).unwrap();
    assert_eq!(buf.as_slice(), b"stable");
    assert!(buf.equals(&buf));
}

// ============================================================================
// Growth Policy
// ============================================================================

#[test]
fn test_exact_growth_on_every_grow() {
    let mut buf = ByteBuffer::new();
    for len in [1usize, 5, 2, 17, 64] {
        buf.append_slice(&vec![0xAB; len]).unwrap();
        assert_eq!(buf.capacity(), buf.size(), "bound 0 must be exact fit");
    }
}

#[test]
fn test_cached_growth_follows_policy() {
    const BOUND: usize = 100;
    let policy = GrowthPolicy::new(BOUND);
    let mut buf = GrowableBuffer::<u8, BOUND>::new();
    let mut expected_capacity = 0;

    for step in 1..=50usize {
        let old_size = buf.size();
        let requested = old_size + step;
        if requested > expected_capacity {
            expected_capacity = policy.target(old_size, requested);
        }
        buf.append_slice(&vec![step as u8; step]).unwrap();
        assert_eq!(buf.capacity(), expected_capacity);
    }
    assert_eq!(buf.size(), (1..=50).sum::<usize>());
}

#[test]
fn test_out_of_memory_is_reported() {
    let mut buf = GrowableBuffer::<u64>::from_slice(&[1, 2, 3]).unwrap();
    let err = buf.reallocate(usize::MAX / 4, false).unwrap_err();
    assert_eq!(
        err,
        BufferError::OutOfMemory {
            requested: usize::MAX / 4
        }
    );
    assert!(!buf.is_valid(), "failed allocation must leave the buffer empty");
    assert_eq!(buf.size(), 0);
    assert_eq!(buf.capacity(), 0);
}

// ============================================================================
// Front Draining
// ============================================================================

#[test]
fn test_drain_front_zero_is_noop() {
    let mut buf = ByteBuffer::from_slice(b"unchanged").unwrap();
    buf.drain_front(0);
    assert_eq!(buf.as_slice(), b"unchanged");
    assert_eq!(buf.capacity(), 9);
}

#[test]
fn test_drain_front_everything_keeps_capacity() {
    let mut buf = GrowableBuffer::<u8, 64>::from_slice(b"abcdef").unwrap();
    let capacity = buf.capacity();
    let size = buf.size();
    buf.drain_front(size);
    assert_eq!(buf.size(), 0);
    assert_eq!(buf.capacity(), capacity);
    assert!(buf.is_valid());
}

#[test]
fn test_drain_front_partial_shifts() {
    let data: Vec<u8> = (0..20).collect();
    for k in 1..20 {
        let mut buf = ByteBuffer::from_slice(&data).unwrap();
        buf.drain_front(k);
        assert_eq!(buf.size(), 20 - k);
        assert_eq!(buf.as_slice(), &data[k..]);
    }
}

#[test]
fn test_streaming_consumer() {
    // producer appends records, consumer drains whole records from the front
    let mut staging = GrowableBuffer::<u8, 256>::new();
    let mut records = Vec::new();

    for i in 0..10u8 {
        staging.append_slice(&[i, i, i, b'\n']).unwrap();
        if i % 3 == 2 {
            while let Some(pos) = staging.as_slice().iter().position(|&b| b == b'\n') {
                records.push(staging.as_slice()[..pos].to_vec());
                staging.drain_front(pos + 1);
            }
        }
    }

    assert_eq!(records.len(), 9);
    assert_eq!(records[4], vec![4, 4, 4]);
    assert_eq!(staging.as_slice(), &[9, 9, 9, b'\n']);
}

// ============================================================================
// Logical Size
// ============================================================================

#[test]
fn test_set_size_clamps_to_capacity() {
    let mut buf = ByteBuffer::with_size(8, true).unwrap();
    assert_eq!(buf.set_size(3), 3);
    assert_eq!(buf.set_size(9), 8);
    assert_eq!(buf.set_size(usize::MAX), 8);
    assert_eq!(buf.size(), 8);
}

#[test]
fn test_set_size_on_empty_buffer() {
    let mut buf = ByteBuffer::new();
    assert_eq!(buf.set_size(10), 0);
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_equality_rules() {
    let a = ByteBuffer::from_slice(b"abc").unwrap();
    let b = GrowableBuffer::<u8, 16>::from_slice(b"abc").unwrap();
    let shorter = ByteBuffer::from_slice(b"ab").unwrap();

    assert!(a.equals(&b));
    assert!(!a.equals(&shorter));
    assert!(ByteBuffer::new().equals(&ByteBuffer::with_size(0, false).unwrap()));
}

#[test]
fn test_equals_slice_requires_enough_elements() {
    let buf = ByteBuffer::from_slice(b"abcdef").unwrap();
    assert!(buf.equals_slice(b"abcdef"));
    assert!(buf.equals_slice(b"abcdefgh"), "only size() elements compared");
    assert!(!buf.equals_slice(b"abc"), "short slices never match");
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_formatted_construction() {
    let buf = CharBuffer::from_fmt(10, format_args!("{}", 42)).unwrap();
    assert_eq!(buf.size(), "42".len() + 1);
    assert_eq!(buf.text(), "42");
    assert_eq!(*buf.at(2), 0);
}

#[test]
fn test_formatted_construction_truncates() {
    let buf: WideBuffer = fmt_buffer!(5, "{}", 1234567).unwrap();
    assert_eq!(buf.size(), 5);
    assert_eq!(buf.text(), "1234");
}

#[test]
fn test_tchar_alias() {
    let buf: TCharBuffer = fmt_buffer!(64, "{}:{}", "host", 8080).unwrap();
    assert_eq!(buf.text(), "host:8080");
}
