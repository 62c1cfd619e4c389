use flexid::{hash_to_partition, FlexId, FlexIdConfig};

fn main() {
    // 10 bits of sequence, 12 bits of partition, epoch 2015-01-01
    let config = FlexIdConfig::builder()
        .epoch(1_420_070_400_000)
        .sequence_bits(10)
        .unwrap()
        .partition_bits(12)
        .unwrap()
        .build();

    let mut generator = FlexId::with_config(config);
    println!(
        "Max sequence: {}, max partition: {}",
        config.max_sequence(),
        config.max_partition()
    );

    // Derive the partition from a user name
    for user in ["alice", "bob", "carol"] {
        let id = generator.generate_for_key(user);
        let logical = generator.extract.partition(id, 0);
        // Map the 12-bit logical partition onto 16 physical shards
        let physical = generator.extract.partition(id, 4);
        println!(
            "{user}: id={id} hash={} logical={logical} physical={physical}",
            hash_to_partition(user)
        );
    }

    // Reconstruct an ID from known segments
    let id = generator.generate_exact(0x5A5A5A5A5, 0x25A, 0xA5);
    println!("Exact ID: {id:#x} -> {:?}", generator.extract.decompose(id));
}
