/// Query parameters for listing a zone's managed headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListManagedHeadersParams {
    /// When set, restricts the listing to headers that are currently enabled.
    pub only_enabled: bool,
}
