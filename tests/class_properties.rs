// Property tests for size-class mapping and the zero-on-reuse guarantee

use proptest::prelude::*;

use sizepool::{BufferPool, MAX_SIZE, SizeClass};

proptest! {
    #[test]
    fn prop_class_mapping_is_monotonic(a in 1usize..=MAX_SIZE, b in 1usize..=MAX_SIZE) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let small_class = SizeClass::for_size(small).unwrap();
        let large_class = SizeClass::for_size(large).unwrap();
        prop_assert!(small_class <= large_class);
        prop_assert_eq!(SizeClass::for_size(small), Some(small_class));
    }

    #[test]
    fn prop_class_is_smallest_fitting_power_of_two(size in 1usize..=MAX_SIZE) {
        let class = SizeClass::for_size(size).unwrap();
        prop_assert!(class.capacity() >= size);
        prop_assert!(class.capacity().is_power_of_two());
        if class.index() > 0 {
            prop_assert!(class.capacity() / 2 < size);
        }
        prop_assert_eq!(SizeClass::for_capacity(class.capacity()), Some(class));
    }

    #[test]
    fn prop_reuse_within_class_is_zeroed(size in 1usize..=8192, fill in 1u8..=255, pick in any::<prop::sample::Index>()) {
        let pool = BufferPool::new();
        let class = SizeClass::for_size(size).unwrap();

        let mut buf = pool.acquire(size);
        buf.full_capacity_mut().fill(fill);
        pool.release(buf);

        // Any other size landing in the same class must come back clean
        let low = if class.index() == 0 { 1 } else { class.capacity() / 2 + 1 };
        let other = low + pick.index(class.capacity() - low + 1);
        let mut buf = pool.acquire(other);
        prop_assert_eq!(buf.size_class(), Some(class));
        prop_assert_eq!(buf.len(), other);
        prop_assert!(buf.full_capacity_mut().iter().all(|&b| b == 0));
        prop_assert_eq!(pool.stats().hits, 1);
    }

    #[test]
    fn prop_held_buffers_never_alias(sizes in proptest::collection::vec(1usize..4096, 1..64)) {
        let pool = BufferPool::new();
        let held: Vec<_> = sizes.iter().map(|&size| pool.acquire(size)).collect();

        let mut ptrs: Vec<_> = held.iter().map(|b| b.as_ptr() as usize).collect();
        ptrs.sort_unstable();
        ptrs.dedup();
        prop_assert_eq!(ptrs.len(), held.len());

        for (buf, &size) in held.iter().zip(&sizes) {
            prop_assert_eq!(buf.len(), size);
            prop_assert_eq!(Some(buf.capacity()), SizeClass::for_size(size).map(SizeClass::capacity));
        }
    }
}
