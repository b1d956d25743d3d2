//! Browser entrypoint. Mounts the app when built for the web; does nothing
//! in native builds, which only exist to run the test suite.

fn main() {
    #[cfg(feature = "web")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::prelude::mount_to_body(chromalens::app::App);
    }
}
