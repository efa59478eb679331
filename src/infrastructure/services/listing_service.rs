//! Listing service - one page of users plus the pagination cursor

use tracing::debug;

use crate::domain::pagination::PageCursor;
use crate::domain::DomainError;
use crate::infrastructure::user::UserService;

/// A user row as shown in the listing table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: u64,
    pub display_name: String,
    pub email: String,
    /// Stored image URL, or the placeholder when the user has none
    pub image_url: String,
}

/// One rendered window over the user collection
#[derive(Debug, Clone)]
pub struct UserPage {
    pub cursor: PageCursor,
    pub rows: Vec<UserRow>,
}

#[derive(Debug, Clone)]
pub struct ListingService {
    users: UserService,
    page_size: usize,
    placeholder_image_url: String,
}

impl ListingService {
    pub fn new(users: UserService, page_size: usize, placeholder_image_url: impl Into<String>) -> Self {
        Self {
            users,
            page_size,
            placeholder_image_url: placeholder_image_url.into(),
        }
    }

    /// Load page `current` (zero-based), ordered by id ascending
    pub async fn page(&self, current: usize) -> Result<UserPage, DomainError> {
        let total = self.users.count().await?;
        let cursor = PageCursor::new(current, self.page_size, total);

        let rows = self
            .users
            .list_page(cursor.offset(), cursor.page_size())
            .await?
            .into_iter()
            .map(|user| UserRow {
                id: user.id().value(),
                display_name: user.display_name().to_string(),
                email: user.email().to_string(),
                image_url: user
                    .image_url()
                    .unwrap_or(self.placeholder_image_url.as_str())
                    .to_string(),
            })
            .collect::<Vec<_>>();

        debug!(
            current = cursor.current(),
            total_pages = cursor.total_pages(),
            rows = rows.len(),
            "Loaded user page"
        );

        Ok(UserPage { cursor, rows })
    }
}
