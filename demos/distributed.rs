use rand::{rng, Rng};
use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use flexid::FlexId;

fn main() {
    let mut handles = vec![];

    // One generator per worker, each owning a distinct partition
    for partition in 0..4i16 {
        handles.push(thread::spawn(move || {
            let mut generator = FlexId::new(0, 8, 8).unwrap();
            generator.partition = partition;

            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.generate();
                let (millis, seq, part) = generator.extract.decompose(id);

                println!(
                    "Partition {} generated ID {} = {} (millis={}, seq={}, part={})",
                    partition, i, id, millis, seq, part
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        let partition_ids = handle.join().unwrap();
        all_ids.extend(partition_ids);
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 20, "IDs collided across partitions!");
    println!("All IDs are unique without any coordination between workers!");
}
