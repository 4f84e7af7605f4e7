#![no_main]

use libfuzzer_sys::fuzz_target;
use growbuf::GrowableBuffer;

// Replays an operation stream against a buffer and a plain Vec model.
fn replay<const CACHE: usize>(data: &[u8]) {
    let mut buf = GrowableBuffer::<u8, CACHE>::new();
    let mut model: Vec<u8> = Vec::new();

    for op in data.chunks(2) {
        let (code, arg) = (op[0], *op.get(1).unwrap_or(&0));
        match code % 7 {
            0 => {
                let piece = vec![arg; (arg % 32) as usize];
                buf.append_slice(&piece).unwrap();
                model.extend_from_slice(&piece);
            }
            1 => {
                buf.drain_front(arg as usize);
                let n = (arg as usize).min(model.len());
                model.drain(..n);
            }
            2 => {
                let n = arg as usize;
                buf.reallocate(n, false).unwrap();
                let keep = n.min(model.len());
                assert_eq!(&buf.as_slice()[..keep], &model[..keep]);
                model.truncate(keep);
                model.extend_from_slice(&buf.as_slice()[keep..]);
            }
            3 => {
                let piece = vec![arg; (arg % 16) as usize];
                buf.copy_from_slice(&piece).unwrap();
                model = piece;
            }
            4 => {
                buf.release();
                model.clear();
            }
            5 => {
                let n = buf.set_size(arg as usize);
                assert!(n <= buf.capacity());
                model = buf.as_slice().to_vec();
            }
            _ => {
                buf.push(arg).unwrap();
                model.push(arg);
            }
        }

        // Verify: invariants and content after every step
        assert!(buf.size() <= buf.capacity());
        assert_eq!(buf.is_valid(), buf.capacity() > 0);
        assert_eq!(buf.as_slice(), model.as_slice());
        assert!(buf.equals_slice(&model) || (model.is_empty() && buf.is_valid()));
    }

    if CACHE == 0 {
        // Verify: exact growth never leaves the copy over-allocated
        let copy = GrowableBuffer::<u8, CACHE>::from_buffer(&buf).unwrap();
        assert_eq!(copy.capacity(), copy.size());
    }
}

fuzz_target!(|data: Vec<u8>| {
    replay::<0>(&data);
    replay::<16>(&data);
    replay::<4096>(&data);
});
