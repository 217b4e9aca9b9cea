//! Arkham Intelligence catalogue
//!
//! On-chain intelligence: swaps, transfers, address and entity attribution,
//! balances, portfolios and token flows. List filters are sent as repeated
//! query parameters (`chains=a&chains=b`).

use super::types::{Field, Kind, ListEncoding, Operation};

const LIST: Kind = Kind::StringList(ListEncoding::Repeated);

const CHAINS: Field = Field::query("chains", LIST).doc("Optional, if empty it will default to all chains");
const ADDRESS: Field = Field::path("address", Kind::String);
const ENTITY: Field = Field::path("entity", Kind::String);
const CHAIN: Field = Field::path("chain", Kind::String);

const COUNTERPARTY_FLOW: Field = Field::query("flow", Kind::Enum(&["all", "in", "out", "self"]))
    .doc("Used to filter the counterparties by their flow of transactions");
const COUNTERPARTY_TOKENS: Field = Field::query("tokens", LIST)
    .doc("Used to filter the counterparties by the tokens they have transacted with");
const COUNTERPARTY_CHAINS: Field = Field::query("chains", LIST)
    .doc("Used to filter the counterparties by the chains they have transacted on");

const TIME_LAST: Field =
    Field::query("timeLast", Kind::String).doc("Duration to aggregate over (e.g. \"24h\")");

pub const OPERATIONS: &[Operation] = &[
    Operation::get(
        "get_swaps",
        "/swaps",
        "GET /swaps - swaps filtered by participants, tokens, time and value",
        &[
            Field::query("base", LIST)
                .doc("Entities/addresses you want to see transactions either from or to"),
            CHAINS,
            Field::query("flow", Kind::Enum(&["in", "out", "all"]))
                .doc("Flow with respect to base (API default: all)"),
            Field::query("from_", LIST)
                .wire("from")
                .doc("Filter for only transactions from certain entities/addresses"),
            Field::query("to", LIST).doc("Filter for only transactions to certain entities/addresses"),
            Field::query("tokens", LIST).doc("Filter for only transactions involving particular tokens"),
            Field::query("timeGte", Kind::Integer)
                .doc("Only transactions with a block timestamp at or after this time"),
            Field::query("timeLte", Kind::Integer)
                .doc("Only transactions with a block timestamp at or before this time"),
            Field::query("timeLast", Kind::String)
                .doc("Only transfers within a duration (e.g. \"1h\", \"3d\", \"10m\")"),
            Field::query("valueGte", Kind::Float).doc("Transfers above a token unit value"),
            Field::query("valueLte", Kind::Float).doc("Transfers below a token unit value"),
            Field::query("usdGte", Kind::Float).doc("Same as valueGte except for USD value"),
            Field::query("usdLte", Kind::Float).doc("Same as valueLte except for USD value"),
            Field::query("sortKey", Kind::Enum(&["time", "value", "usd"]))
                .doc("Sort results by this key (API default: time)"),
            Field::query("sortDir", Kind::Enum(&["asc", "desc"]))
                .doc("Sort direction (API default: desc)"),
            Field::query("limit", Kind::Integer).doc("Number of transfers to return (API default: 20)"),
            Field::query("offset", Kind::Integer)
                .doc("Transfers to skip before returning limit (API default: 0)"),
            Field::query("sold", LIST).doc("Filter for where certain assets are sold"),
            Field::query("bought", LIST).doc("Filter for where certain assets are bought"),
            Field::query("counterparties", LIST)
                .doc("Filter for transactions involving certain counterparties"),
            Field::query("senders", LIST).doc("Filter for where certain addresses are the sender"),
            Field::query("receivers", LIST).doc("Filter for where certain addresses are the receiver"),
            Field::query("protocols", LIST).doc("Filter for swaps that occur on certain protocols"),
        ],
    ),
    Operation::get(
        "get_transfers_histogram",
        "/transfers/histogram",
        "GET /transfers/histogram",
        &[],
    ),
    Operation::get(
        "get_intelligence_address",
        "/intelligence/address/{address}",
        "GET /intelligence/address/{address} - attribution for an address",
        &[ADDRESS, CHAINS],
    ),
    Operation::get(
        "get_intelligence_address_all",
        "/intelligence/address/{address}/all",
        "GET /intelligence/address/{address}/all - attribution on every chain",
        &[ADDRESS],
    ),
    Operation::get(
        "get_intelligence_address_with_extra_enrichment",
        "/intelligence/address_with_extra_enrichment/{address}",
        "GET /intelligence/address_with_extra_enrichment/{address}",
        &[
            ADDRESS,
            Field::query("tags", Kind::Boolean).doc("Optional, defaults to false"),
            CHAINS,
        ],
    ),
    Operation::get(
        "get_intelligence_entity",
        "/intelligence/entity/{entity}",
        "GET /intelligence/entity/{entity}",
        &[ENTITY],
    ),
    Operation::get(
        "get_intelligence_contract",
        "/intelligence/contract/{chain}/{address}",
        "GET /intelligence/contract/{chain}/{address}",
        &[CHAIN, ADDRESS],
    ),
    Operation::get(
        "get_intelligence_token_by_pricing_id",
        "/intelligence/token/{coinGeckoPricingId}",
        "GET /intelligence/token/{coinGeckoPricingId}",
        &[Field::path("coinGeckoPricingId", Kind::String)],
    ),
    Operation::get(
        "get_intelligence_token_by_chain_address",
        "/intelligence/token/{chain}/{address}",
        "GET /intelligence/token/{chain}/{address}",
        &[CHAIN, ADDRESS],
    ),
    Operation::get(
        "get_history_entity",
        "/history/entity/{entity}",
        "GET /history/entity/{entity}",
        &[ENTITY, CHAINS],
    ),
    Operation::get(
        "get_history_address",
        "/history/address/{address}",
        "GET /history/address/{address}",
        &[ADDRESS, CHAINS],
    ),
    Operation::get(
        "get_portfolio_entity",
        "/portfolio/entity/{entity}",
        "GET /portfolio/entity/{entity}",
        &[ENTITY, CHAINS],
    ),
    Operation::get(
        "get_portfolio_address",
        "/portfolio/address/{address}",
        "GET /portfolio/address/{address}",
        &[ADDRESS, CHAINS],
    ),
    Operation::get(
        "get_transfers_by_tx_hash",
        "/transfers/tx/{hash}",
        "GET /transfers/tx/{hash} - transfers inside one transaction",
        &[
            Field::path("hash", Kind::String).doc("The hash of a transaction"),
            Field::query("chain", Kind::String)
                .required()
                .doc("The chain which the transaction occurred on (e.g. ethereum)"),
            Field::query("transferType", Kind::String)
                .required()
                .doc("The type of transfer: token, internal or external"),
        ],
    ),
    Operation::get(
        "get_tx",
        "/tx/{hash}",
        "GET /tx/{hash}",
        &[Field::path("hash", Kind::String).doc("The transaction hash")],
    ),
    Operation::get(
        "get_balances_address",
        "/balances/address/{address}",
        "GET /balances/address/{address}",
        &[ADDRESS],
    ),
    Operation::get(
        "get_balances_entity",
        "/balances/entity/{entity}",
        "GET /balances/entity/{entity}",
        &[ENTITY, CHAINS],
    ),
    Operation::get(
        "get_loans_address",
        "/loans/address/{address}",
        "GET /loans/address/{address}",
        &[ADDRESS],
    ),
    Operation::get(
        "get_loans_entity",
        "/loans/entity/{entity}",
        "GET /loans/entity/{entity}",
        &[ENTITY, CHAINS],
    ),
    Operation::get(
        "get_counterparties_address",
        "/counterparties/address/{address}",
        "GET /counterparties/address/{address}",
        &[
            ADDRESS,
            COUNTERPARTY_FLOW,
            COUNTERPARTY_TOKENS,
            COUNTERPARTY_CHAINS,
        ],
    ),
    Operation::get(
        "get_counterparties_entity",
        "/counterparties/entity/{entity}",
        "GET /counterparties/entity/{entity}",
        &[
            ENTITY,
            COUNTERPARTY_FLOW,
            COUNTERPARTY_TOKENS,
            COUNTERPARTY_CHAINS,
        ],
    ),
    Operation::get(
        "get_portfolio_time_series_entity",
        "/portfolio/timeSeries/entity/{entity}",
        "GET /portfolio/timeSeries/entity/{entity}",
        &[
            ENTITY,
            Field::query("pricingId", Kind::String)
                .required()
                .doc("CoinGecko pricing ID of the token"),
        ],
    ),
    Operation::get(
        "get_portfolio_time_series_address",
        "/portfolio/timeSeries/address/{address}",
        "GET /portfolio/timeSeries/address/{address}",
        &[
            Field::path("address", Kind::StringList(ListEncoding::CommaJoined))
                .doc("A single address or a list of addresses"),
            Field::query("pricingId", Kind::String)
                .required()
                .doc("CoinGecko pricing ID of the token"),
        ],
    ),
    Operation::get(
        "get_token_holders_by_pricing_id",
        "/token/holders/{pricing_id}",
        "GET /token/holders/{pricing_id}",
        &[Field::path("pricing_id", Kind::String).doc("A CoinGecko pricing ID")],
    ),
    Operation::get(
        "get_token_holders_by_chain_address",
        "/token/holders/{chain}/{address}",
        "GET /token/holders/{chain}/{address}",
        &[CHAIN, ADDRESS],
    ),
    Operation::get(
        "get_token_top_flow_by_id",
        "/token/top_flow/{id}",
        "GET /token/top_flow/{id}",
        &[
            Field::path("id", Kind::String).doc("A CoinGecko pricing ID"),
            TIME_LAST,
            CHAINS,
        ],
    ),
    Operation::get(
        "get_token_top_flow_by_chain_address",
        "/token/top_flow/{chain}/{address}",
        "GET /token/top_flow/{chain}/{address}",
        &[CHAIN, ADDRESS, TIME_LAST, CHAINS],
    ),
    Operation::get(
        "get_networks_status",
        "/networks/status",
        "GET /networks/status",
        &[],
    ),
    Operation::get(
        "get_networks_history",
        "/networks/history/{chain}",
        "GET /networks/history/{chain}",
        &[CHAIN],
    ),
    Operation::get(
        "get_api_important_entities",
        "/api/importantEntities",
        "GET /api/importantEntities",
        &[],
    ),
    Operation::get(
        "get_tag",
        "/tag/{id}",
        "GET /tag/{id}",
        &[Field::path("id", Kind::String)],
    ),
    Operation::get(
        "get_tag_params",
        "/tag/{id}/params",
        "GET /tag/{id}/params",
        &[Field::path("id", Kind::String)],
    ),
    Operation::get("get_tag_top", "/tag/top", "GET /tag/top", &[]),
    Operation::get("get_tag_all", "/tag/all", "GET /tag/all", &[]),
];
