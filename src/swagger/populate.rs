use std::io::Read;

use log::debug;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncRead, AsyncReadExt};

use super::Merge;
use crate::utils::error::Error;

/// Reads `reader` to the end and overlays the decoded JSON onto `target`.
pub fn read_populate<R, T>(mut reader: R, target: &mut T) -> Result<(), Error>
where
    R: Read,
    T: DeserializeOwned + Merge,
{
    let mut data = Vec::with_capacity(1024);
    reader.read_to_end(&mut data)?;
    decode_into(&data, target)
}

/// Same as `read_populate`, for async sources such as response bodies.
pub async fn read_populate_async<R, T>(mut reader: R, target: &mut T) -> Result<(), Error>
where
    R: AsyncRead + Unpin,
    T: DeserializeOwned + Merge,
{
    let mut data = Vec::with_capacity(1024);
    reader.read_to_end(&mut data).await?;
    decode_into(&data, target)
}

fn decode_into<T>(data: &[u8], target: &mut T) -> Result<(), Error>
where
    T: DeserializeOwned + Merge,
{
    debug!("populating from {} bytes", data.len());
    // nothing to decode
    if data.is_empty() {
        return Ok(());
    }

    let decoded: T = serde_json::from_slice(data)?;
    target.merge_from(decoded);
    Ok(())
}
