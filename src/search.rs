use crate::types::Block;

/// Case-insensitive substring filter over the cached blocks. A block is kept
/// when its category label or any of its messages contains the query. The
/// empty query keeps everything; block and message order is never changed.
pub fn filter_blocks(blocks: &[Block], query: &str) -> Vec<Block> {
    let query = query.to_lowercase();
    blocks
        .iter()
        .filter(|block| {
            block.category.to_lowercase().contains(&query)
                || block
                    .messages
                    .iter()
                    .any(|msg| msg.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}
