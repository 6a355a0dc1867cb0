fn main() {
    // The page bridge only needs the context-menu command; declaring it here
    // generates the `allow-content-context-menu` permission used by the capability.
    tauri_build::try_build(
        tauri_build::Attributes::new().app_manifest(
            tauri_build::AppManifest::new().commands(&["content_context_menu"]),
        ),
    )
    .expect("failed to run tauri-build");
}
