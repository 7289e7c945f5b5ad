//! Model Asset Diagnostic
//!
//! Standalone check that the character model exists where the demo expects
//! it, with size, modification time, and a GLB header sanity check. Purely
//! informational: always exits 0, the running demo has its own placeholder
//! fallback when the model is absent.
//!
//! Run with: `cargo run --bin check-model`

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "check-model", about = "Check that the character model asset is in place")]
struct Args {
    /// Path to the model file
    #[arg(default_value = "assets/models/runner.glb")]
    path: PathBuf,
}

fn main() {
    let args = Args::parse();
    println!("Checking for model at path: {}", args.path.display());

    match fs::metadata(&args.path) {
        Ok(meta) => {
            println!("✅ Model file exists!");
            println!("File size: {} KB", meta.len().div_ceil(1024));
            match meta.modified() {
                Ok(mtime) => match mtime.duration_since(SystemTime::UNIX_EPOCH) {
                    Ok(age) => println!("Last modified: {} (unix seconds)", age.as_secs()),
                    Err(_) => println!("Last modified: before the unix epoch?"),
                },
                Err(err) => println!("Last modified: unavailable ({err})"),
            }
            check_glb_header(&args.path);
        }
        Err(_) => {
            eprintln!("❌ Model file does not exist at the specified path!");
            println!(
                "Please ensure the model file is at {}",
                args.path.display()
            );
        }
    }

    // Also report on the containing directory so a misplaced file is easy
    // to spot.
    if let Some(dir) = args.path.parent() {
        match fs::read_dir(dir) {
            Ok(entries) => {
                println!("✅ Models directory exists!");
                let files: Vec<String> = entries
                    .filter_map(|entry| entry.ok())
                    .map(|entry| entry.file_name().to_string_lossy().into_owned())
                    .collect();
                println!("Files in models directory: {files:?}");
            }
            Err(_) => {
                eprintln!("❌ Models directory does not exist!");
                println!("Please create the directory: {}", dir.display());
            }
        }
    }
}

/// Report whether the file starts with a valid GLB container header.
fn check_glb_header(path: &Path) {
    let mut header = [0u8; 12];
    let readable = fs::File::open(path)
        .and_then(|mut file| file.read_exact(&mut header))
        .is_ok();

    if !readable {
        println!("⚠️  File too short to contain a GLB header");
        return;
    }

    let magic = &header[0..4];
    let version = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
    if magic == b"glTF" {
        println!("✅ GLB header looks valid (version {version})");
    } else {
        println!("⚠️  File does not start with a GLB magic; is this really a .glb?");
    }
}
