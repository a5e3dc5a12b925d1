//! Example: Load and inspect an OBJ file.
//!
//! Run with: cargo run --example inspect_obj -- path/to/model.obj

use std::env;

use prism_core::load_obj;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_obj <path-to-obj-file>");
        return;
    }

    let path = &args[1];
    println!("Loading OBJ file: {}", path);

    match load_obj(path) {
        Ok(groups) => {
            println!("\n=== {} groups ===", groups.len());
            for group in &groups {
                let bounds = group.mesh.bounds;
                println!(
                    "  {} - {} vertices, {} triangles",
                    group.name,
                    group.mesh.vertex_count(),
                    group.mesh.triangle_count()
                );
                println!(
                    "       Bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
                    bounds.x.min, bounds.y.min, bounds.z.min, bounds.x.max, bounds.y.max, bounds.z.max
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading OBJ: {}", e);
            std::process::exit(1);
        }
    }
}
