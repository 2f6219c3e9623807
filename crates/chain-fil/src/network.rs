/// Supported Filecoin networks.
///
/// The network only affects the leading character of the text address form;
/// the raw 21-byte address is identical on both networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilNetwork {
    Mainnet,
    Testnet,
}

impl FilNetwork {
    /// Leading character of addresses on this network.
    pub fn address_prefix(self) -> char {
        match self {
            FilNetwork::Mainnet => 'f',
            FilNetwork::Testnet => 't',
        }
    }

    /// Detect the network from the first character of a text address.
    pub fn from_address(address: &str) -> Option<Self> {
        match address.chars().next()? {
            'f' | 'F' => Some(FilNetwork::Mainnet),
            't' | 'T' => Some(FilNetwork::Testnet),
            _ => None,
        }
    }
}
