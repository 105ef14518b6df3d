//! Method names served by `electronero-wallet-rpc` and `electronerod`.
//!
//! Only used for listing and logging; calls to names outside these lists are
//! still forwarded to the server.

/// JSON-RPC methods of the wallet.
pub const WALLET_METHODS: &[&str] = &[
    "add_address_book",
    "all_tokens",
    "check_reserve_proof",
    "check_spend_proof",
    "check_tx_key",
    "check_tx_proof",
    "create_account",
    "create_address",
    "create_wallet",
    "delete_address_book",
    "export_key_images",
    "export_multisig_info",
    "finalize_multisig",
    "get_account_tags",
    "get_accounts",
    "get_address",
    "get_address_book",
    "get_attribute",
    "get_balance",
    "get_bulk_payments",
    "get_height",
    "get_languages",
    "get_payments",
    "get_reserve_proof",
    "get_spend_proof",
    "get_transfer_by_txid",
    "get_transfers",
    "get_tx_key",
    "get_tx_notes",
    "get_tx_proof",
    "getaddress",
    "getbalance",
    "getheight",
    "import_key_images",
    "import_multisig_info",
    "incoming_transfers",
    "is_multisig",
    "label_account",
    "label_address",
    "make_integrated_address",
    "make_multisig",
    "make_uri",
    "my_tokens",
    "open_wallet",
    "parse_uri",
    "prepare_multisig",
    "query_key",
    "relay_tx",
    "rescan_blockchain",
    "rescan_spent",
    "rescan_token_tx",
    "set_account_tag_description",
    "set_attribute",
    "set_tx_notes",
    "sign",
    "sign_multisig",
    "split_integrated_address",
    "start_mining",
    "stop_mining",
    "stop_wallet",
    "store",
    "submit_multisig",
    "sweep_all",
    "sweep_dust",
    "sweep_single",
    "sweep_unmixable",
    "tag_accounts",
    "token_allowance",
    "token_approve",
    "token_balance",
    "token_burn",
    "token_create",
    "token_history",
    "token_history_addr",
    "token_info",
    "token_lock_fee",
    "token_mint",
    "token_set_fee",
    "token_transfer",
    "token_transfer_from",
    "tokens_deployed",
    "transfer",
    "transfer_split",
    "untag_accounts",
    "verify",
];

/// JSON-RPC methods of the daemon, posted to `/json_rpc`.
pub const DAEMON_METHODS: &[&str] = &[
    "flush_txpool",
    "get_alternate_chains",
    "get_bans",
    "get_block",
    "get_block_count",
    "get_block_header_by_hash",
    "get_block_header_by_height",
    "get_block_headers_range",
    "get_block_template",
    "get_coinbase_tx_sum",
    "get_connections",
    "get_fee_estimate",
    "get_info",
    "get_last_block_header",
    "get_output_distribution",
    "get_output_histogram",
    "get_txpool_backlog",
    "get_version",
    "getblock",
    "getblockcount",
    "getblockheaderbyhash",
    "getblockheaderbyheight",
    "getblockheadersrange",
    "getblocktemplate",
    "getlastblockheader",
    "hard_fork_info",
    "on_get_block_hash",
    "on_getblockhash",
    "relay_tx",
    "rescan_token_tx",
    "send_raw_transaction",
    "set_bans",
    "submit_block",
    "submitblock",
    "sync_info",
];

/// Plain HTTP endpoints of the daemon; the body is posted without an envelope.
pub const DAEMON_PATHS: &[&str] = &[
    "/get_alt_blocks_hashes",
    "/get_height",
    "/get_info",
    "/get_limit",
    "/get_outs",
    "/get_peer_list",
    "/get_transaction_pool",
    "/get_transaction_pool_hashes.bin",
    "/get_transaction_pool_stats",
    "/get_transactions",
    "/getheight",
    "/getinfo",
    "/gettransactions",
    "/in_peers",
    "/is_key_image_spent",
    "/mining_status",
    "/out_peers",
    "/save_bc",
    "/send_raw_transaction",
    "/sendrawtransaction",
    "/set_limit",
    "/set_log_categories",
    "/set_log_hash_rate",
    "/set_log_level",
    "/start_mining",
    "/start_save_graph",
    "/stop_daemon",
    "/stop_mining",
    "/stop_save_graph",
    "/update",
];

pub fn is_wallet_method(name: &str) -> bool {
    WALLET_METHODS.contains(&name)
}

pub fn is_daemon_method(name: &str) -> bool {
    DAEMON_METHODS.contains(&name)
}

pub fn is_daemon_path(path: &str) -> bool {
    DAEMON_PATHS.contains(&path)
}
