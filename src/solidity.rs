//! Definitions of Solidity functions called during deployment

use alloy_sol_types::sol;

sol! {
    function initialize(address owner) external;
}
