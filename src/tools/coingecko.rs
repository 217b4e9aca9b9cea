//! CoinGecko catalogue
//!
//! Market data from the CoinGecko Pro API plus GeckoTerminal on-chain pool
//! data, and three local time helpers. Fields are declared in the order the
//! query string is emitted: always-sent defaults first, then optionals.

use super::types::{Field, Kind, LocalOp, Operation};

const INCLUDE: Field = Field::query("include", Kind::String)
    .doc("Attributes to include, comma-separated (e.g. \"base_token,dex\")");
const PAGE: Field = Field::query("page", Kind::Integer)
    .default_int(1)
    .doc("Page through results");
const DURATION: Field = Field::query("duration", Kind::String)
    .default_str("24h")
    .doc("Duration to sort trending list by");
const NETWORK: Field = Field::path("network", Kind::String).doc("Network ID");

const fn flag(name: &'static str, default: bool, description: &'static str) -> Field {
    Field::query(name, Kind::Boolean)
        .default_bool(default)
        .doc(description)
}

pub const OPERATIONS: &[Operation] = &[
    Operation::local(
        "get_current_time",
        LocalOp::CurrentTime,
        "Get the current time in both human-readable format and UNIX timestamp.",
        &[],
    ),
    Operation::local(
        "date_to_timestamp",
        LocalOp::DateToTimestamp,
        "Convert a human-readable date (YYYY-MM-DD or YYYY-MM-DD HH:MM:SS, UTC) to a UNIX timestamp.",
        &[Field::query("date_str", Kind::String)
            .required()
            .doc("Date string in format YYYY-MM-DD or YYYY-MM-DD HH:MM:SS")],
    ),
    Operation::local(
        "timestamp_to_date",
        LocalOp::TimestampToDate,
        "Convert a UNIX timestamp to a human-readable UTC date.",
        &[Field::query("timestamp", Kind::Integer)
            .required()
            .doc("UNIX timestamp (seconds since epoch)")],
    ),
    Operation::get(
        "get_top_gainers_losers",
        "coins/top_gainers_losers",
        "GET /coins/top_gainers_losers - top 30 coins with largest price gain and loss",
        &[
            Field::query("vs_currency", Kind::String)
                .required()
                .doc("Target currency of coins (e.g. 'usd', 'eur', 'btc')"),
            Field::query("duration", Kind::String)
                .default_str("24h")
                .doc("Filter result by time range"),
            Field::query("top_coins", Kind::String)
                .default_str("1000")
                .doc("Filter result by market cap ranking (300 to 1000) or 'all'"),
        ],
    ),
    Operation::get(
        "get_coin_markets",
        "coins/markets",
        "GET /coins/markets - supported coins with price, market cap, volume and market data",
        &[
            Field::query("vs_currency", Kind::String)
                .required()
                .doc("Target currency of coins and market data"),
            Field::query("order", Kind::String)
                .default_str("market_cap_desc")
                .doc("Sort result by field"),
            Field::query("per_page", Kind::Integer)
                .default_int(100)
                .doc("Total results per page (max 250)"),
            PAGE,
            flag("sparkline", false, "Include sparkline 7 days data"),
            Field::query("locale", Kind::String)
                .default_str("en")
                .doc("Language background"),
            Field::query("ids", Kind::String).doc("Coins' IDs, comma-separated"),
            Field::query("names", Kind::String).doc("Coins' names, comma-separated"),
            Field::query("symbols", Kind::String).doc("Coins' symbols, comma-separated"),
            Field::query("include_tokens", Kind::String)
                .doc("For symbols lookups, 'all' includes all matching tokens"),
            Field::query("category", Kind::String).doc("Filter based on coins' category"),
            Field::query("price_change_percentage", Kind::String)
                .doc("Price change percentage timeframes (e.g. \"1h,24h,7d\")"),
            Field::query("precision", Kind::String).doc("Decimal place for currency price value"),
        ],
    ),
    Operation::get(
        "get_coin_by_id",
        "coins/{id}",
        "GET /coins/{id} - metadata and market data of a coin",
        &[
            Field::path("id", Kind::String).doc("Coin ID"),
            flag("localization", true, "Include all localized languages"),
            flag("tickers", true, "Include tickers data"),
            flag("market_data", true, "Include market data"),
            flag("community_data", true, "Include community data"),
            flag("developer_data", true, "Include developer data"),
            flag("sparkline", false, "Include sparkline 7 days data"),
        ],
    ),
    Operation::get(
        "get_coin_ohlc_range",
        "coins/{id}/ohlc/range",
        "GET /coins/{id}/ohlc/range - OHLC chart within a range of timestamps",
        &[
            Field::path("id", Kind::String).doc("Coin ID"),
            Field::query("vs_currency", Kind::String)
                .required()
                .doc("Target currency of price data"),
            Field::query("from_timestamp", Kind::Integer)
                .required()
                .wire("from")
                .doc("Starting date in UNIX timestamp"),
            Field::query("to_timestamp", Kind::Integer)
                .required()
                .wire("to")
                .doc("Ending date in UNIX timestamp"),
            Field::query("interval", Kind::Enum(&["daily", "hourly"]))
                .required()
                .doc("Data interval: daily (up to 180 days) or hourly (up to 31 days)"),
        ],
    ),
    Operation::get(
        "get_coin_by_contract",
        "coins/{id}/contract/{contract_address}",
        "GET /coins/{id}/contract/{contract_address} - coin data by token contract",
        &[
            Field::path("id", Kind::String).doc("Asset platform ID"),
            Field::path("contract_address", Kind::String).doc("The contract address of token"),
        ],
    ),
    Operation::get(
        "search",
        "search",
        "GET /search - search for coins, categories and markets",
        &[Field::query("query", Kind::String).required().doc("Search query")],
    ),
    Operation::get(
        "get_trending_searches",
        "search/trending",
        "GET /search/trending - trending search coins, NFTs and categories",
        &[Field::query("show_max", Kind::String)
            .doc("Show max results for the given types (e.g. \"coins,nfts,categories\")")],
    ),
    Operation::get(
        "get_token_price_by_address",
        "onchain/simple/networks/{network}/token_price/{addresses}",
        "GET /onchain/simple/networks/{network}/token_price/{addresses}",
        &[
            NETWORK,
            Field::path("addresses", Kind::String)
                .doc("Token contract addresses, comma-separated"),
            flag("include_market_cap", false, "Include market capitalization"),
            flag("mcap_fdv_fallback", false, "Return FDV if market cap is not available"),
            flag("include_24hr_vol", false, "Include 24hr volume"),
            flag("include_24hr_price_change", false, "Include 24hr price change"),
            flag("include_total_reserve_in_usd", false, "Include total reserve in USD"),
        ],
    ),
    Operation::get(
        "get_trending_pools",
        "onchain/networks/trending_pools",
        "GET /onchain/networks/trending_pools - trending pools across all networks",
        &[PAGE, DURATION, INCLUDE],
    ),
    Operation::get(
        "get_network_trending_pools",
        "onchain/networks/{network}/trending_pools",
        "GET /onchain/networks/{network}/trending_pools",
        &[NETWORK, PAGE, DURATION, INCLUDE],
    ),
    Operation::get(
        "get_pool_data",
        "onchain/networks/{network}/pools/{address}",
        "GET /onchain/networks/{network}/pools/{address}",
        &[
            NETWORK,
            Field::path("address", Kind::String).doc("Pool address"),
            INCLUDE,
        ],
    ),
    Operation::get(
        "get_pools_megafilter",
        "onchain/pools/megafilter",
        "GET /onchain/pools/megafilter - pools filtered across all networks",
        &[
            PAGE,
            Field::query("sort", Kind::String)
                .default_str("h6_trending")
                .doc("Sort the pools by field"),
            Field::query("tx_count_duration", Kind::String).default_str("24h"),
            Field::query("buys_duration", Kind::String).default_str("24h"),
            Field::query("sells_duration", Kind::String).default_str("24h"),
            Field::query("networks", Kind::String).doc("Filter pools by networks, comma-separated"),
            Field::query("dexes", Kind::String)
                .doc("Filter pools by DEXes, comma-separated (only with one network)"),
            INCLUDE,
            Field::query("fdv_usd_min", Kind::Float),
            Field::query("fdv_usd_max", Kind::Float),
            Field::query("reserve_in_usd_min", Kind::Float),
            Field::query("reserve_in_usd_max", Kind::Float),
            Field::query("h24_volume_usd_min", Kind::Float),
            Field::query("h24_volume_usd_max", Kind::Float),
            Field::query("pool_created_hour_min", Kind::Float),
            Field::query("pool_created_hour_max", Kind::Float),
            Field::query("tx_count_min", Kind::Integer),
            Field::query("tx_count_max", Kind::Integer),
            Field::query("buys_min", Kind::Integer),
            Field::query("buys_max", Kind::Integer),
            Field::query("sells_min", Kind::Integer),
            Field::query("sells_max", Kind::Integer),
            Field::query("checks", Kind::String).doc(
                "Checks, comma-separated: no_honeypot, good_gt_score, on_coingecko, has_social",
            ),
            Field::query("buy_tax_percentage_min", Kind::Float),
            Field::query("buy_tax_percentage_max", Kind::Float),
            Field::query("sell_tax_percentage_min", Kind::Float),
            Field::query("sell_tax_percentage_max", Kind::Float),
        ],
    ),
    Operation::get(
        "get_trending_search_pools",
        "onchain/pools/trending_search",
        "GET /onchain/pools/trending_search - trending search pools across all networks",
        &[
            Field::query("pools", Kind::Integer)
                .default_int(4)
                .doc("Number of pools to return, maximum 10"),
            INCLUDE,
        ],
    ),
];
