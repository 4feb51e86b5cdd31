use output_bits::{BitVector, BitVectorError};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Output Bits Examples ===\n");

    // Example 1: A bank of relays
    let _ = example_relays();

    // Example 2: Shift-register frames
    let _ = example_shift_register();

    // Example 3: Memory comparison
    example_memory_savings();
}

fn example_relays() -> Result<(), BitVectorError> {
    println!("Example 1: Eight relays");

    let mut relays = BitVector::new(8);
    relays.set_on_off(1, true)?;
    relays.set_on_off(4, true)?;
    relays.toggle(8)?;

    let mut line = String::new();
    relays.print_states(&mut line).unwrap();
    print!("  {}", line);
    println!("  Storage: {}", relays.type_str());

    // Rejected, nothing changes
    if let Err(e) = relays.set_on_off(9, true) {
        println!("  Error: {}", e);
    }
    println!();

    Ok(())
}

fn example_shift_register() -> Result<(), BitVectorError> {
    println!("Example 2: Frames for a 24-output shift register chain");

    let mut outputs = BitVector::new(24);
    outputs.set_on_off(1, true)?;
    outputs.set_on_off(24, true)?;

    let mut frame = [0u8; 3];
    outputs.raw_data(&mut frame)?;
    println!("  LSB first: {:02X?}", frame);

    outputs.raw_data_reversed(&mut frame)?;
    println!("  MSB first: {:02X?}", frame);
    println!();

    Ok(())
}

fn example_memory_savings() {
    println!("Example 3: Memory savings comparison");

    for count in [8, 16, 32, 64, 200] {
        let outputs = BitVector::new(count);
        println!(
            "  {:>3} outputs: [bool; N] = {:>3} bytes, {:<13} = {:>2} bytes",
            count,
            count,
            outputs.type_str(),
            outputs.storage_bytes()
        );
    }
}
