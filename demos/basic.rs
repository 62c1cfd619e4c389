use flexid::FlexId;

fn main() {
    // 8 bits of sequence, 8 bits of partition, Unix epoch
    let mut generator = FlexId::new(0, 8, 8).unwrap();
    generator.partition = 1;

    let id1 = generator.generate();
    let id2 = generator.generate();
    let id3 = generator.generate();

    println!("Generated IDs:");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Or extract components individually
    let millis = generator.extract.millis(id2);
    let seq = generator.extract.sequence(id2);
    let partition = generator.extract.partition(id2, 0);
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Millis: {millis} ms since epoch");
    println!("  Sequence: {seq}");
    println!("  Partition: {partition}");
}

fn print_id(id: i64, generator: &FlexId) {
    let (_, sequence, partition) = generator.extract.decompose(id);
    let timestamp = generator.extract.unix_millis(id);
    let datetime = generator.extract.timestamp(id).unwrap();

    println!("  ID: {id}, Timestamp: {timestamp}, Human date: {datetime}, Sequence: {sequence}, Partition: {partition}");
}
