// Build script for flutter_rust_bridge code generation
//
// Bindings are generated out of band with the CLI tool:
//   flutter_rust_bridge_codegen generate
//
// The script only makes cargo rebuild when the exported surface changes.

fn main() {
    println!("cargo:rerun-if-changed=src/api.rs");
    println!("cargo:rerun-if-changed=assets/bridge_config.json");
}
