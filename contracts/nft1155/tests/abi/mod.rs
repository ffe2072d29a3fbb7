#![allow(dead_code)]
use alloy::sol;

sol!(
    #[sol(rpc)]
    contract Nft1155 {
        function uri(uint256 id) external view returns (string memory uri);
        function setURI(string memory newuri) external;
        function supportsInterface(bytes4 interfaceId) external view returns (bool supportsInterface);

        function mint(address to, uint256 id, uint256 amount, bytes memory data) external;
        function mintBatch(address to, uint256[] memory ids, uint256[] memory amounts, bytes memory data) external;

        function balanceOf(address account, uint256 id) external view returns (uint256 balance);
        function balanceOfBatch(address[] memory accounts, uint256[] memory ids) external view returns (uint256[] memory balances);
        function setApprovalForAll(address operator, bool approved) external;
        function isApprovedForAll(address account, address operator) external view returns (bool approved);
        function safeTransferFrom(address from, address to, uint256 id, uint256 value, bytes memory data) external;
        function safeBatchTransferFrom(address from, address to, uint256[] memory ids, uint256[] memory values, bytes memory data) external;

        function owner() external view returns (address owner);
        function transferOwnership(address newOwner) external;
        function renounceOwnership() external;

        error ERC1155InsufficientBalance(address sender, uint256 balance, uint256 needed, uint256 tokenId);
        error ERC1155InvalidSender(address sender);
        error ERC1155InvalidReceiver(address receiver);
        error ERC1155MissingApprovalForAll(address operator, address owner);
        error ERC1155InvalidApprover(address approver);
        error ERC1155InvalidOperator(address operator);
        error ERC1155InvalidArrayLength(uint256 idsLength, uint256 valuesLength);

        error OwnableUnauthorizedAccount(address account);
        error OwnableInvalidOwner(address owner);

        #[derive(Debug, PartialEq)]
        event TransferSingle(address indexed operator, address indexed from, address indexed to, uint256 id, uint256 value);
        #[derive(Debug, PartialEq)]
        event TransferBatch(address indexed operator, address indexed from, address indexed to, uint256[] ids, uint256[] values);
        #[derive(Debug, PartialEq)]
        event ApprovalForAll(address indexed account, address indexed operator, bool approved);
        #[derive(Debug, PartialEq)]
        event URI(string value, uint256 indexed id);
        #[derive(Debug, PartialEq)]
        event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
    }
);
