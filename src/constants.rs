//! Constants used in the deploy scripts

/// The ABI of the native-asset escrow implementation contract
pub const ESCROW_NATIVE_ABI: &str = include_str!("../artifacts/EscrowNative.abi");

/// The bytecode of the native-asset escrow implementation contract
pub const ESCROW_NATIVE_BYTECODE: &str = include_str!("../artifacts/EscrowNative.bin");

/// The ABI of the token escrow implementation contract
pub const ESCROW_TOKEN_ABI: &str = include_str!("../artifacts/EscrowToken.abi");

/// The bytecode of the token escrow implementation contract
pub const ESCROW_TOKEN_BYTECODE: &str = include_str!("../artifacts/EscrowToken.bin");

/// The ABI of the ERC1967 proxy behind which initialized escrow instances run
///
/// Compiled from https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/ERC1967/ERC1967Proxy.sol
pub const ERC1967_PROXY_ABI: &str = include_str!("../artifacts/ERC1967Proxy.abi");

/// The bytecode of the ERC1967 proxy
///
/// Compiled from https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/ERC1967/ERC1967Proxy.sol
pub const ERC1967_PROXY_BYTECODE: &str = include_str!("../artifacts/ERC1967Proxy.bin");

/// The number of confirmations to wait for each contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 0;

/// The minimum number of signing keys the scripts expect to be configured.
///
/// The first key is the auxiliary dev account, the second the deploying account.
pub const MIN_SIGNING_KEYS: usize = 2;

/// The name of the per-network file recording deployed contract addresses
pub const ADDRESSES_FILE_NAME: &str = "addresses.json";

/// The top-level manifest key under which the escrow addresses are recorded
pub const ESCROWS_KEY: &str = "escrows";

/// The manifest sub-key for the native-asset escrow implementation address
pub const ESCROW_NATIVE_KEY: &str = "escrowNative";

/// The manifest sub-key for the token escrow implementation address
pub const ESCROW_TOKEN_KEY: &str = "escrowToken";

/// The chain id of the Avalanche C-Chain mainnet
pub const AVALANCHE_CHAIN_ID: u64 = 43114;

/// The manifest directory name for the Avalanche C-Chain mainnet
pub const AVALANCHE_NETWORK_NAME: &str = "avalanche";

/// The chain id of the Fuji testnet
pub const FUJI_CHAIN_ID: u64 = 43113;

/// The manifest directory name for the Fuji testnet
pub const FUJI_NETWORK_NAME: &str = "fuji";

/// The chain id used by local development nodes
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// The manifest directory name for local development nodes
pub const LOCAL_NETWORK_NAME: &str = "localhost";
