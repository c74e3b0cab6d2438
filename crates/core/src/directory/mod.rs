//! Organisation directory access

pub mod ports;

use diwan_domain::{ReferenceData, Result};
pub use ports::DirectoryProvider;

/// Fetch employees, departments and divisions concurrently.
///
/// Fails as a whole if any of the three calls fails.
pub async fn fetch_reference_data<D>(directory: &D) -> Result<ReferenceData>
where
    D: DirectoryProvider + ?Sized,
{
    let (employees, departments, divisions) = futures::try_join!(
        directory.employees(),
        directory.departments(),
        directory.divisions()
    )?;

    Ok(ReferenceData { employees, departments, divisions })
}
