//! DefiLlama catalogue
//!
//! TVL, stablecoins, yields, ETFs, bridges, coin prices and volume
//! summaries from the DefiLlama Pro API. The API key is part of the base URL,
//! so paths here are relative to `https://pro-api.llama.fi/{key}`.

use super::types::{Field, Kind, Operation};

const PROTOCOL: Field = Field::path("protocol", Kind::String).doc("Protocol slug (e.g. 'aave')");
const CHAIN: Field = Field::path("chain", Kind::String).doc("Chain slug (e.g. 'Ethereum')");
const POOL: Field = Field::path("pool", Kind::String).doc("Pool id");
const COINS: Field = Field::path("coins", Kind::String)
    .doc("Comma-separated tokens in format {chain}:{address}");
const STABLECOIN: Field = Field::query("stablecoin", Kind::Integer).doc("Stablecoin ID");
const BRIDGE_ID: Field = Field::query("id", Kind::Integer).doc("Bridge ID (see get_bridges)");
const SEARCH_WIDTH: Field = Field::query("search_width", Kind::String)
    .default_str("6h")
    .wire("searchWidth")
    .doc("Time range on either side to find price data");

const OPTIONS_DATA_TYPE: Field =
    Field::query("data_type", Kind::Enum(&["dailyPremiumVolume", "dailyNotionalVolume"]))
        .default_str("dailyNotionalVolume")
        .wire("dataType")
        .doc("Desired data type");
const FEES_DATA_TYPE: Field = Field::query("data_type", Kind::Enum(&["dailyFees", "dailyRevenue"]))
    .default_str("dailyFees")
    .wire("dataType")
    .doc("Desired data type");

const fn exclude_chart(default: bool) -> Field {
    Field::query("exclude_total_data_chart", Kind::Boolean)
        .default_bool(default)
        .wire("excludeTotalDataChart")
        .doc("true to exclude aggregated chart from response")
}

const fn exclude_breakdown(default: bool) -> Field {
    Field::query("exclude_total_data_chart_breakdown", Kind::Boolean)
        .default_bool(default)
        .wire("excludeTotalDataChartBreakdown")
        .doc("true to exclude broken down chart from response")
}

pub const OPERATIONS: &[Operation] = &[
    // TVL
    Operation::get(
        "get_token_protocols",
        "/api/tokenProtocols/{symbol}",
        "GET /api/tokenProtocols/{symbol} - amount of a token within all protocols",
        &[Field::path("symbol", Kind::String).doc("Token slug (e.g. 'usdt')")],
    ),
    Operation::get(
        "get_protocol_inflows",
        "/api/inflows/{protocol}/{timestamp}",
        "GET /api/inflows/{protocol}/{timestamp} - inflows and outflows for a protocol at a date",
        &[
            PROTOCOL,
            Field::path("timestamp", Kind::Integer).doc("Unix timestamp (e.g. 1700006400)"),
        ],
    ),
    Operation::get(
        "get_chain_assets",
        "/api/chainAssets",
        "GET /api/chainAssets - assets of all chains",
        &[],
    ),
    Operation::get(
        "get_protocols",
        "/api/protocols",
        "GET /api/protocols - all protocols along with their tvl",
        &[],
    ),
    Operation::get(
        "get_protocol_details",
        "/api/protocol/{protocol}",
        "GET /api/protocol/{protocol} - historical TVL with token and chain breakdowns",
        &[PROTOCOL],
    ),
    Operation::get(
        "get_historical_chain_tvl",
        "/api/v2/historicalChainTvl",
        "GET /api/v2/historicalChainTvl - historical TVL of DeFi on all chains",
        &[],
    ),
    Operation::get(
        "get_historical_chain_tvl_by_chain",
        "/api/v2/historicalChainTvl/{chain}",
        "GET /api/v2/historicalChainTvl/{chain} - historical TVL of a chain",
        &[CHAIN],
    ),
    Operation::get(
        "get_protocol_tvl",
        "/api/tvl/{protocol}",
        "GET /api/tvl/{protocol} - current TVL of a protocol",
        &[PROTOCOL],
    ),
    Operation::get(
        "get_chains",
        "/api/v2/chains",
        "GET /api/v2/chains - current TVL of all chains",
        &[],
    ),
    // Stablecoins
    Operation::get(
        "get_stablecoin_dominance",
        "/stablecoins/stablecoindominance/{chain}",
        "GET /stablecoins/stablecoindominance/{chain} - stablecoin dominance per chain",
        &[CHAIN, STABLECOIN],
    ),
    Operation::get(
        "get_stablecoins",
        "/stablecoins/stablecoins",
        "GET /stablecoins/stablecoins - all stablecoins with their circulating amounts",
        &[Field::query("include_prices", Kind::Boolean)
            .default_bool(true)
            .wire("includePrices")
            .doc("Whether to include current stablecoin prices")],
    ),
    Operation::get(
        "get_stablecoin_charts_all",
        "/stablecoins/stablecoincharts/all",
        "GET /stablecoins/stablecoincharts/all - historical mcap sum of all stablecoins",
        &[STABLECOIN],
    ),
    Operation::get(
        "get_stablecoin_charts_by_chain",
        "/stablecoins/stablecoincharts/{chain}",
        "GET /stablecoins/stablecoincharts/{chain} - historical stablecoin mcap in a chain",
        &[CHAIN, STABLECOIN],
    ),
    Operation::get(
        "get_stablecoin_history",
        "/stablecoins/stablecoin/{asset}",
        "GET /stablecoins/stablecoin/{asset} - historical mcap and chain distribution of a stablecoin",
        &[Field::path("asset", Kind::Integer).doc("Stablecoin ID")],
    ),
    Operation::get(
        "get_stablecoin_chains",
        "/stablecoins/stablecoinchains",
        "GET /stablecoins/stablecoinchains - current stablecoin mcap on each chain",
        &[],
    ),
    Operation::get(
        "get_stablecoin_prices",
        "/stablecoins/stablecoinprices",
        "GET /stablecoins/stablecoinprices - historical prices of all stablecoins",
        &[],
    ),
    // Users and emissions
    Operation::get(
        "get_active_users",
        "/api/activeUsers",
        "GET /api/activeUsers - active users on chains and protocols pages",
        &[],
    ),
    Operation::get(
        "get_user_data",
        "/api/userData/{type}/{protocol_id}",
        "GET /api/userData/{type}/{protocolId} - user data by type and protocol",
        &[
            Field::path("type", Kind::String).doc("Data type (e.g. 'activeUsers')"),
            Field::path("protocol_id", Kind::Integer).doc("Protocol ID"),
        ],
    ),
    Operation::get(
        "get_emissions",
        "/api/emissions",
        "GET /api/emissions - all tokens along with basic info for each",
        &[],
    ),
    Operation::get(
        "get_emission_data",
        "/api/emission/{protocol}",
        "GET /api/emission/{protocol} - unlocks data for a token/protocol",
        &[PROTOCOL],
    ),
    // Dashboards
    Operation::get(
        "get_categories",
        "/api/categories",
        "GET /api/categories - overview of all categories across all protocols",
        &[],
    ),
    Operation::get(
        "get_forks",
        "/api/forks",
        "GET /api/forks - overview of all forks across all protocols",
        &[],
    ),
    Operation::get(
        "get_oracles",
        "/api/oracles",
        "GET /api/oracles - overview of all oracles across all protocols",
        &[],
    ),
    Operation::get("get_hacks", "/api/hacks", "GET /api/hacks - overview of all hacks", &[]),
    Operation::get("get_raises", "/api/raises", "GET /api/raises - overview of all raises", &[]),
    Operation::get(
        "get_treasuries",
        "/api/treasuries",
        "GET /api/treasuries - all protocols on the treasuries dashboard",
        &[],
    ),
    Operation::get("get_entities", "/api/entities", "GET /api/entities - all entities", &[]),
    Operation::get(
        "get_historical_liquidity",
        "/api/historicalLiquidity/{token}",
        "GET /api/historicalLiquidity/{token} - available liquidity for swapping a token",
        &[Field::path("token", Kind::String).doc("Token slug (e.g. 'usdt')")],
    ),
    // Yields
    Operation::get(
        "get_yield_pools_old",
        "/yields/poolsOld",
        "GET /yields/poolsOld - pools including pool_old (usually the pool address)",
        &[],
    ),
    Operation::get(
        "get_yield_pools_borrow",
        "/yields/poolsBorrow",
        "GET /yields/poolsBorrow - borrow cost APY of assets from lending markets",
        &[],
    ),
    Operation::get(
        "get_yield_chart_lend_borrow",
        "/yields/chartLendBorrow/{pool}",
        "GET /yields/chartLendBorrow/{pool} - historical borrow cost APY of a pool",
        &[POOL],
    ),
    Operation::get(
        "get_yield_perps",
        "/yields/perps",
        "GET /yields/perps - funding rates and open interest of perps across exchanges",
        &[],
    ),
    Operation::get(
        "get_yield_lsd_rates",
        "/yields/lsdRates",
        "GET /yields/lsdRates - APY rates of multiple LSDs",
        &[],
    ),
    // ETFs
    Operation::get(
        "get_etf_overview",
        "/etfs/overview",
        "GET /etfs/overview - BTC ETFs and their metrics",
        &[],
    ),
    Operation::get(
        "get_etf_overview_eth",
        "/etfs/overviewEth",
        "GET /etfs/overviewEth - ETH ETFs",
        &[],
    ),
    Operation::get(
        "get_etf_history",
        "/etfs/history",
        "GET /etfs/history - historical AUM of all BTC ETFs",
        &[],
    ),
    Operation::get(
        "get_etf_history_eth",
        "/etfs/historyEth",
        "GET /etfs/historyEth - historical AUM of all ETH ETFs",
        &[],
    ),
    Operation::get(
        "get_fdv_performance",
        "/fdv/performance/{period}",
        "GET /fdv/performance/{period} - narrative performance by category, weighted by mcap",
        &[Field::path("period", Kind::Enum(&["7", "30", "ytd", "365"]))
            .doc("One of '7', '30', 'ytd', '365'")],
    ),
    Operation::get(
        "get_yield_pools",
        "/yields/pools",
        "GET /yields/pools - latest data for all pools, including predictions",
        &[],
    ),
    Operation::get(
        "get_yield_chart",
        "/yields/chart/{pool}",
        "GET /yields/chart/{pool} - historical APY and TVL of a pool",
        &[POOL],
    ),
    // Derivatives
    Operation::get(
        "get_derivatives_overview",
        "/api/overview/derivatives",
        "GET /api/overview/derivatives - derivatives with volume summaries",
        &[exclude_chart(false), exclude_breakdown(false)],
    ),
    Operation::get(
        "get_derivatives_summary",
        "/api/summary/derivatives/{protocol}",
        "GET /api/summary/derivatives/{protocol} - volume details of a perp protocol",
        &[PROTOCOL, exclude_chart(false), exclude_breakdown(false)],
    ),
    // Bridges
    Operation::get(
        "get_bridges",
        "/bridges",
        "GET /bridges - all bridges with summaries of recent volumes",
        &[Field::query("include_chains", Kind::Boolean)
            .default_bool(true)
            .wire("includeChains")
            .doc("Include previous day volume breakdown by chain")],
    ),
    Operation::get(
        "get_bridge_details",
        "/bridge/{id}",
        "GET /bridge/{id} - bridge volume summary and breakdown by chain",
        &[Field::path("id", Kind::Integer).doc("Bridge ID (see get_bridges)")],
    ),
    Operation::get(
        "get_bridge_volume",
        "/bridgevolume/{chain}",
        "GET /bridgevolume/{chain} - historical volumes for a bridge, chain or both",
        &[
            Field::path("chain", Kind::String).doc("Chain slug, or 'all' for every chain"),
            BRIDGE_ID,
        ],
    ),
    Operation::get(
        "get_bridge_day_stats",
        "/bridgedaystats/{timestamp}/{chain}",
        "GET /bridgedaystats/{timestamp}/{chain} - 24hr token and address volume breakdown",
        &[
            Field::path("timestamp", Kind::Integer)
                .doc("Unix timestamp of the 24hr period starting at 00:00 UTC"),
            CHAIN,
            BRIDGE_ID,
        ],
    ),
    Operation::get(
        "get_bridge_transactions",
        "/transactions/{id}",
        "GET /transactions/{id} - transactions for a bridge within a date range",
        &[
            Field::path("id", Kind::Integer).doc("Bridge ID (see get_bridges)"),
            Field::query("start_timestamp", Kind::Integer)
                .wire("starttimestamp")
                .doc("Start of the date range (unix timestamp)"),
            Field::query("end_timestamp", Kind::Integer)
                .wire("endtimestamp")
                .doc("End of the date range (unix timestamp)"),
            Field::query("source_chain", Kind::String)
                .wire("sourcechain")
                .doc("Filter by source chain (e.g. 'Polygon')"),
            Field::query("address", Kind::String).doc("Filter by address in format {chain}:{address}"),
            Field::query("limit", Kind::Integer).doc("Limit number of transactions (max 6000)"),
        ],
    ),
    // Coin prices
    Operation::get(
        "get_current_prices",
        "/coins/prices/current/{coins}",
        "GET /coins/prices/current/{coins} - current prices of tokens by contract address",
        &[COINS, SEARCH_WIDTH],
    ),
    Operation::get(
        "get_historical_prices",
        "/coins/prices/historical/{timestamp}/{coins}",
        "GET /coins/prices/historical/{timestamp}/{coins} - historical prices of tokens",
        &[
            Field::path("timestamp", Kind::Integer).doc("UNIX timestamp for historical prices"),
            COINS,
            SEARCH_WIDTH,
        ],
    ),
    Operation::get(
        "get_batch_historical_prices",
        "/coins/batchHistorical",
        "GET /coins/batchHistorical - prices for multiple tokens at multiple timestamps",
        &[
            Field::query("coins", Kind::Object)
                .required()
                .doc("Object mapping {chain}:{address} to arrays of timestamps"),
            SEARCH_WIDTH,
        ],
    ),
    Operation::get(
        "get_price_chart",
        "/coins/chart/{coins}",
        "GET /coins/chart/{coins} - token prices at regular time intervals",
        &[
            COINS,
            Field::query("period", Kind::String)
                .default_str("24h")
                .doc("Duration between data points"),
            Field::query("search_width", Kind::String)
                .default_str("600")
                .wire("searchWidth")
                .doc("Time range on either side to find price data"),
            Field::query("start", Kind::Integer).doc("Unix timestamp of earliest data point"),
            Field::query("end", Kind::Integer).doc("Unix timestamp of latest data point"),
            Field::query("span", Kind::Integer).doc("Number of data points returned"),
        ],
    ),
    Operation::get(
        "get_price_percentage",
        "/coins/percentage/{coins}",
        "GET /coins/percentage/{coins} - percentage change in price over time",
        &[
            COINS,
            Field::query("look_forward", Kind::Boolean)
                .default_bool(false)
                .wire("lookForward")
                .doc("Whether to look forward from timestamp"),
            Field::query("period", Kind::String)
                .default_str("24h")
                .doc("Duration between data points"),
            Field::query("timestamp", Kind::Integer).doc("Timestamp of data point (defaults to now)"),
        ],
    ),
    Operation::get(
        "get_first_price_record",
        "/coins/prices/first/{coins}",
        "GET /coins/prices/first/{coins} - earliest price record for coins",
        &[COINS],
    ),
    Operation::get(
        "get_closest_block",
        "/coins/block/{chain}/{timestamp}",
        "GET /coins/block/{chain}/{timestamp} - closest block to a timestamp",
        &[
            Field::path("chain", Kind::String).doc("Chain identifier"),
            Field::path("timestamp", Kind::Integer).doc("UNIX timestamp"),
        ],
    ),
    // Volumes
    Operation::get(
        "get_dex_overview",
        "/api/overview/dexs",
        "GET /api/overview/dexs - all dexs with volume summaries",
        &[exclude_chart(true), exclude_breakdown(true)],
    ),
    Operation::get(
        "get_dex_overview_by_chain",
        "/api/overview/dexs/{chain}",
        "GET /api/overview/dexs/{chain} - dexs with volume summaries on a chain",
        &[
            Field::path("chain", Kind::String).doc("Chain name (e.g. 'ethereum')"),
            exclude_chart(true),
            exclude_breakdown(true),
        ],
    ),
    Operation::get(
        "get_dex_summary",
        "/api/summary/dexs/{protocol}",
        "GET /api/summary/dexs/{protocol} - dex volume summary with historical data",
        &[PROTOCOL, exclude_chart(true), exclude_breakdown(true)],
    ),
    Operation::get(
        "get_options_overview",
        "/api/overview/options",
        "GET /api/overview/options - options dexs with volume summaries",
        &[exclude_chart(true), exclude_breakdown(true), OPTIONS_DATA_TYPE],
    ),
    Operation::get(
        "get_options_overview_by_chain",
        "/api/overview/options/{chain}",
        "GET /api/overview/options/{chain} - options dexs with volume summaries on a chain",
        &[
            Field::path("chain", Kind::String).doc("Chain name (e.g. 'ethereum')"),
            exclude_chart(true),
            exclude_breakdown(true),
            OPTIONS_DATA_TYPE,
        ],
    ),
    Operation::get(
        "get_options_summary",
        "/api/summary/options/{protocol}",
        "GET /api/summary/options/{protocol} - options dex volume summary",
        &[PROTOCOL, OPTIONS_DATA_TYPE],
    ),
    Operation::get(
        "get_fees_summary",
        "/api/summary/fees/{protocol}",
        "GET /api/summary/fees/{protocol} - protocol fees and revenue with historical data",
        &[PROTOCOL, FEES_DATA_TYPE],
    ),
];
