use std::sync::Barrier;
use std::thread;

use tyname::value::U16;
use tyname::{type_name, type_name_pt, type_name_rt, value_name_pt};

struct Unique;

#[tyname_testhelpers::test]
fn first_use_from_many_threads() {
    const THREADS: usize = 16;
    let barrier = Barrier::new(THREADS);

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    (
                        type_name_rt::<Option<Unique>>(),
                        type_name_pt::<Option<Unique>>(),
                        value_name_pt::<U16<513>>(),
                        type_name::<&[u8; 2]>().to_string(),
                    )
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    let (rt, pt, value, composed) = &results[0];
    assert_eq!(rt, pt);
    assert_eq!(*value, "513");
    assert_eq!(composed, "u8[2]&");
    for result in &results {
        assert!(core::ptr::eq(result.0, *rt));
        assert_eq!(result.1, *pt);
        assert_eq!(&result.3, composed);
    }
}
