//! Driven port for fetching pages of user records from upstream.
//!
//! The domain owns the page shape and the failure taxonomy so the pagination
//! driver stays adapter-agnostic. Adapters own the transport and the per-call
//! timeout.

use async_trait::async_trait;
use pagination::Page;

use super::define_port_error;
use crate::domain::UserRecord;

/// One page of upstream users.
pub type UserPage = Page<UserRecord>;

define_port_error! {
    /// Errors surfaced while fetching a page of users.
    pub enum UserSourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "users API transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "users API timed out: {message}",
        /// The users API answered with a non-success status.
        Status { status: u16, message: String } =>
            "users API returned status {status}: {message}",
        /// The response body could not be decoded into user records.
        Decode { message: String } =>
            "users API response decode failed: {message}",
    }
}

/// Port for reading one page of users at an offset.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the page that starts at `skip`.
    ///
    /// The page size is chosen by the source. Implementations must bound
    /// the call with a timeout and report it as [`UserSourceError::Timeout`].
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use department_stats::domain::ports::{FixtureUserSource, UserSource};
    ///
    /// let source = FixtureUserSource::default();
    /// let page = source.fetch_page(0).await?;
    /// assert!(page.is_empty());
    /// # Ok::<(), department_stats::domain::ports::UserSourceError>(())
    /// ```
    async fn fetch_page(&self, skip: u64) -> Result<UserPage, UserSourceError>;
}

/// In-memory source serving a fixed list of users in fixed-size pages.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserSource {
    users: Vec<UserRecord>,
    page_size: usize,
}

impl FixtureUserSource {
    /// Serve `users` in pages of `page_size` (at least one user per page).
    pub fn new(users: Vec<UserRecord>, page_size: usize) -> Self {
        Self {
            users,
            page_size: page_size.max(1),
        }
    }
}

#[async_trait]
impl UserSource for FixtureUserSource {
    async fn fetch_page(&self, skip: u64) -> Result<UserPage, UserSourceError> {
        let total = u64::try_from(self.users.len()).unwrap_or(u64::MAX);
        let start = usize::try_from(skip).unwrap_or(usize::MAX);
        let items: Vec<UserRecord> = self
            .users
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();
        let limit = u64::try_from(self.page_size).unwrap_or(u64::MAX);
        Ok(Page::new(items, total, skip, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;
    use rstest::rstest;

    fn users(count: usize) -> Vec<UserRecord> {
        (0..count)
            .map(|index| UserRecord {
                department: "Legal".to_owned(),
                gender: Gender::Female,
                age: 20 + u32::try_from(index).expect("small index"),
                hair_color: "Brown".to_owned(),
                first_name: format!("User{index}"),
                last_name: "Fixture".to_owned(),
                postal_code: format!("{index:05}"),
            })
            .collect()
    }

    #[tokio::test]
    async fn default_fixture_serves_empty_page() {
        let page = FixtureUserSource::default()
            .fetch_page(0)
            .await
            .expect("fixture page");
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }

    #[rstest]
    #[case(0, 2)]
    #[case(2, 2)]
    #[case(4, 1)]
    #[case(9, 0)]
    #[tokio::test]
    async fn fixture_pages_through_users(#[case] skip: u64, #[case] expected_len: usize) {
        let source = FixtureUserSource::new(users(5), 2);
        let page = source.fetch_page(skip).await.expect("fixture page");
        assert_eq!(page.len(), expected_len);
        assert_eq!(page.total, 5);
        assert_eq!(page.skip, skip);
        assert_eq!(page.limit, 2);
    }

    #[rstest]
    #[case(UserSourceError::transport("reset"), "users API transport failed: reset")]
    #[case(UserSourceError::timeout("5000ms"), "users API timed out: 5000ms")]
    #[case(
        UserSourceError::status(503_u16, "maintenance"),
        "users API returned status 503: maintenance"
    )]
    #[case(UserSourceError::decode("bad json"), "users API response decode failed: bad json")]
    fn errors_render_their_cause(#[case] error: UserSourceError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
