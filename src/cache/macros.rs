/// Serves a read from the query cache, fetching it on a miss.
///
/// If the key holds a fresh entry, that value is returned. Otherwise the
/// block is awaited, its value stored under the key, and returned. Errors
/// from the block are returned as-is and leave the key stale.
///
/// # Arguments
/// * `$cache`: a `QueryCache` (or reference to one).
/// * `$key`: the `QueryKey` the read is stored under.
/// * `$block`: a future producing `AppResult<T>`.
///
/// # Example
/// ```rust,ignore
/// let prefs: Vec<Preference> = cached!(cache, QueryKey::Preferences(user_id), async {
///     backend.list_preferences(&user_id).await
/// })?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $block:expr) => {{
        if let Some(cached) = $cache.get_from_cache(&$key).await? {
            Ok(cached)
        } else {
            let value = $block.await?;
            $cache.store(&$key, &value).await?;
            Ok(value)
        }
    }};
}
