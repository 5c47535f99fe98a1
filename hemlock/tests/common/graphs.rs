use crate::common::virtual_network::VirtualNetwork;

/// 1 -- 2 -- 3, unit cost on both links.
pub fn vnet_line_of_three() -> VirtualNetwork {
    VirtualNetwork::create(&[1, 2, 3], &[(1, 1, 2, 1.0), (2, 2, 3, 1.0)])
}

pub fn vnet_simple_weighted() -> VirtualNetwork {
    VirtualNetwork::create(
        &[1, 2, 3, 4, 5],
        &[
            (0, 1, 2, 2.0),
            (1, 1, 3, 1.0),
            (2, 2, 3, 4.0),
            (3, 2, 4, 5.0),
            (4, 3, 4, 100.0),
            (5, 3, 5, 8.0),
            (6, 4, 5, 1.0),
        ],
    )
}
