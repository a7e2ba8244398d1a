/// Extract a short type name from a full module path, dropping any generic
/// parameter list.
///
/// Given `"my_crate::some_module::MyStage<Q, C>"`, returns `"MyStage"`.
/// Used for stage names in pipeline logs.
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
