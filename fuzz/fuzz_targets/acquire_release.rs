#![no_main]

use libfuzzer_sys::fuzz_target;
use sizepool::{Buffer, BufferPool, PoolConfig, SizeClass};

fuzz_target!(|ops: Vec<(u16, u8)>| {
    let pool = BufferPool::with_config(PoolConfig::default().with_max_retained_per_class(Some(8)));
    let mut held: Vec<Buffer> = Vec::new();

    for (size, fill) in ops {
        let size = size as usize;

        // Odd fill bytes release the oldest held buffer instead
        if fill % 2 == 1 && !held.is_empty() {
            pool.release(held.remove(0));
            continue;
        }

        let mut buf = pool.acquire(size);

        // Verify: shape and zeroing
        assert_eq!(buf.len(), size);
        assert!(buf.capacity() >= size);
        if size > 0 {
            assert_eq!(
                Some(buf.capacity()),
                SizeClass::for_size(size).map(SizeClass::capacity)
            );
        }
        assert!(buf.full_capacity_mut().iter().all(|&b| b == 0));

        // Verify: no aliasing with anything still held
        if !buf.is_sentinel() {
            assert!(held.iter().all(|other| other.as_ptr() != buf.as_ptr()));
        }

        buf.full_capacity_mut().fill(fill | 1);
        held.push(buf);
    }

    for buf in held {
        pool.release(buf);
    }
});
