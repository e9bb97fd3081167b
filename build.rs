fn main() {
    println!("cargo:rerun-if-changed=schemas/library.graphql");

    cynic_codegen::register_schema("library")
        .from_sdl_file("schemas/library.graphql")
        .unwrap()
        .as_default()
        .unwrap();
}
