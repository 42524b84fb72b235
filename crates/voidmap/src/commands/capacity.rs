use voidmap_core::{MAX_BOXES, min_buffer_len};

pub fn execute(boxes: usize) {
    if boxes > MAX_BOXES {
        eprintln!("Error: at most {MAX_BOXES} boxes can be decomposed at once.");
        std::process::exit(1);
    }
    println!("{}", min_buffer_len(boxes));
}
