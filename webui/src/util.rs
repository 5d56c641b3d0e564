pub fn wndw() -> web_sys::Window {
    unsafe {
        web_sys::window().unwrap_unchecked()
    }
}
